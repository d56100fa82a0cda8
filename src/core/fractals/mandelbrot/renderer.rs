use log::{debug, trace};

use crate::core::actions::generate_fractal::{
    generate_fractal::generate_fractal_row, generate_fractal_rayon::generate_fractal_row_rayon,
};
use crate::core::data::{complex::Complex, complex_rect::ComplexRect};
use crate::core::fractals::mandelbrot::{
    algorithm::MandelbrotAlgorithm,
    palette::Palette,
    zoom::ZoomState,
    zoom_config::{Sampling, ZoomConfig, ZoomConfigError},
};
use crate::core::util::stepped_axis::stepped_axis;

/// Stateful zoom animation over the Mandelbrot set.
///
/// Every [`ZoomRenderer::render_frame`] call advances the zoom by one step and
/// draws the new view into a caller-owned buffer of packed `0xAABBGGRR`
/// pixels. Rendering is total: degenerate dimensions or short buffers lose
/// writes, never panic.
#[derive(Debug, Clone)]
pub struct ZoomRenderer {
    palette: Palette,
    plane: ComplexRect,
    focus: Complex,
    state: ZoomState,
    low_resolution_block: u32,
    sampling: Sampling,
    frames_rendered: u64,
}

impl ZoomRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(ZoomConfig::default())
    }

    pub fn with_config(config: ZoomConfig) -> Result<Self, ZoomConfigError> {
        config.validate()?;

        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ZoomConfig) -> Self {
        Self {
            palette: Palette::new(config.palette_size),
            plane: config.plane,
            focus: config.focus,
            state: ZoomState::from_config(&config),
            low_resolution_block: config.low_resolution_block,
            sampling: config.sampling,
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn zoom_width(&self) -> f64 {
        self.state.zoom_width()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.state.max_iterations()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn focus(&self) -> Complex {
        self.focus
    }

    /// Restarts the animation; palette and viewport are untouched.
    pub fn reset(&mut self) {
        debug!("zoom reset after {} frames", self.frames_rendered);

        self.state.reset();
        self.frames_rendered = 0;
    }

    /// Advances the zoom one step, then renders the new view into `buffer`.
    ///
    /// `buffer` is read as `width * height` row-major pixels. Low resolution
    /// samples once per block of `low_resolution_block` squared pixels.
    /// Each pixel write is bounds-checked individually; a block overhanging the
    /// right edge spills into the start of the next row, and anything past the
    /// end of `buffer` is dropped. Samples are taken one row at a time and
    /// only for blocks that can land inside `buffer`.
    pub fn render_frame(
        &mut self,
        buffer: &mut [u32],
        width: u32,
        height: u32,
        high_resolution: bool,
    ) {
        self.state.advance();
        self.frames_rendered += 1;

        let step = if high_resolution {
            1
        } else {
            self.low_resolution_block
        };

        debug!(
            "frame {}: {}x{} step {} zoom width {:e} max iterations {}",
            self.frames_rendered,
            width,
            height,
            step,
            self.state.zoom_width(),
            self.state.max_iterations()
        );

        if width == 0 || height == 0 {
            return;
        }

        let region = self.state.region(self.focus);
        let origin = region.top_left();
        let x_step = self.plane.width() / f64::from(width) * f64::from(step);
        let y_step = self.plane.height() / f64::from(height) * f64::from(step);

        let (plane_min, plane_max) = (self.plane.top_left(), self.plane.bottom_right());
        let width = width as usize;
        let step = step as usize;

        // a block starting at or past the end of the buffer writes nothing
        let columns: Vec<f64> = stepped_axis(plane_min.real, plane_max.real, x_step)
            .take(buffer.len().div_ceil(step))
            .map(|x| x * region.width() + origin.real)
            .collect();

        if columns.is_empty() {
            return;
        }

        let algorithm = MandelbrotAlgorithm::new(self.state.max_iterations());
        trace!("sampling {} columns per row ({:?})", columns.len(), self.sampling);

        let rows = stepped_axis(plane_min.imag, plane_max.imag, y_step);

        for (row_index, y) in rows.enumerate() {
            let y_pix = row_index * step;

            if y_pix.checked_mul(width).is_none_or(|start| start >= buffer.len()) {
                break;
            }

            let imag = y * region.height() + origin.imag;
            let iterations = match self.sampling {
                Sampling::Sequential => generate_fractal_row(&columns, imag, &algorithm),
                Sampling::Parallel => generate_fractal_row_rayon(&columns, imag, &algorithm),
            };

            for (column_index, &count) in iterations.iter().enumerate() {
                let colour = self.palette.colour_for(count);
                fill_block(buffer, width, column_index * step, y_pix, step, colour);
            }
        }
    }
}

impl Default for ZoomRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `colour` to the `size`×`size` block whose top-left pixel is
/// `(x, y)` in a row-major buffer `width` pixels wide.
fn fill_block(buffer: &mut [u32], width: usize, x: usize, y: usize, size: usize, colour: u32) {
    for offset_x in 0..size {
        for offset_y in 0..size {
            let index = (y + offset_y)
                .checked_mul(width)
                .and_then(|row_start| row_start.checked_add(x + offset_x));

            if let Some(pixel) = index.and_then(|i| buffer.get_mut(i)) {
                *pixel = colour;
            }
        }
    }
}
