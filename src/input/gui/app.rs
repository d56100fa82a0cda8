//! Windowed host: shows the zoom animation at a fixed frame cadence.

use std::error::Error;
use std::time::{Duration, Instant};

use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::adapters::pixel_format::copy_abgr_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::renderer::ZoomRenderer;
use crate::input::gui::zoom_input::ZoomInputState;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(15);
pub const FRAME_SIZE: u32 = 400;

/// Application state holding the pixels surface and the animation.
struct App {
    pixels: Pixels<'static>,
    renderer: ZoomRenderer,
    buffer: PixelBuffer,
    input: ZoomInputState,
}

impl App {
    /// The frame buffer stays `FRAME_SIZE` square; pixels scales it to the window.
    fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(FRAME_SIZE, FRAME_SIZE, surface_texture)?;

        Ok(Self {
            pixels,
            renderer: ZoomRenderer::new(),
            buffer: PixelBuffer::new(FRAME_SIZE, FRAME_SIZE),
            input: ZoomInputState::default(),
        })
    }

    fn tick(&mut self) {
        if self.input.take_reset() {
            self.renderer.reset();
        }

        let (width, height) = (self.buffer.width(), self.buffer.height());
        self.renderer.render_frame(
            self.buffer.buffer_mut(),
            width,
            height,
            self.input.high_resolution(),
        );

        copy_abgr_to_rgba(self.buffer.buffer(), self.pixels.frame_mut());
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Skip invalid sizes (e.g., minimized window)
        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.pixels.resize_surface(width, height) {
            error!("resize surface error: {e}");
        }
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Zoom")
            .with_inner_size(LogicalSize::new(f64::from(FRAME_SIZE), f64::from(FRAME_SIZE)))
            .with_min_inner_size(LogicalSize::new(100.0, 100.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window)?;
    let mut next_frame = Instant::now();

    info!("zoom window open, hold the left button for full resolution, R restarts");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { ref event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                info!("closing after {} frames", app.renderer.frames_rendered());
                elwt.exit();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                app.input.handle_mouse_button(*button, *state);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    app.input.handle_key_event(key_code, event.state);
                }
            }
            WindowEvent::Resized(size) => {
                app.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = app.pixels.render() {
                    error!("render error: {e}");
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();

            if now >= next_frame {
                app.tick();
                window.request_redraw();
                next_frame = now + FRAME_INTERVAL;
            }

            elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
        _ => {}
    })?;

    Ok(())
}
