use std::path::Path;
use std::time::{Duration, Instant};

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::renderer::ZoomRenderer;

/// Drives a [`ZoomRenderer`] against a buffer it owns, one tick per frame.
pub struct ZoomController<P: FilePresenterPort> {
    presenter: P,
    renderer: ZoomRenderer,
    buffer: PixelBuffer,
    last_frame_duration: Option<Duration>,
}

impl<P: FilePresenterPort> ZoomController<P> {
    pub fn new(presenter: P, renderer: ZoomRenderer, width: u32, height: u32) -> Self {
        Self {
            presenter,
            renderer,
            buffer: PixelBuffer::new(width, height),
            last_frame_duration: None,
        }
    }

    pub fn tick(&mut self, high_resolution: bool) {
        let width = self.buffer.width();
        let height = self.buffer.height();
        let start = Instant::now();

        self.renderer
            .render_frame(self.buffer.buffer_mut(), width, height, high_resolution);

        self.last_frame_duration = Some(start.elapsed());
    }

    pub fn reset(&mut self) {
        self.renderer.reset();
    }

    #[must_use]
    pub fn renderer(&self) -> &ZoomRenderer {
        &self.renderer
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn last_frame_duration(&self) -> Option<Duration> {
        self.last_frame_duration
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        self.presenter.present(&self.buffer, filepath)?;
        info!(
            "frame {} written to {}",
            self.renderer.frames_rendered(),
            filepath.display()
        );

        Ok(())
    }
}
