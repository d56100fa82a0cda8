use std::{error::Error, fmt};

use crate::core::{
    data::{complex::Complex, complex_rect::ComplexRect},
    fractals::mandelbrot::palette::DEFAULT_PALETTE_SIZE,
};

pub const DEFAULT_ZOOM_WIDTH: f64 = 0.01;
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.9;
pub const DEFAULT_ITERATION_STEP: u32 = 10;
pub const DEFAULT_LOW_RESOLUTION_BLOCK: u32 = 4;
pub const MAX_LOW_RESOLUTION_BLOCK: u32 = 64;

/// Point just outside the main set that the animation converges on.
pub const DEFAULT_FOCUS: Complex = Complex::new(-0.7746806106269039, -0.1374168856037867);

/// Logical plane the pixel grid is laid over before the zoom remap.
pub(crate) fn default_plane() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.0, -1.5), Complex::new(2.0, 1.5))
        .expect("default logical plane is valid")
}

/// How grid samples are computed inside one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    Sequential,
    /// Rows sampled on the rayon pool; output is identical to sequential.
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomConfigError {
    ZeroPaletteSize,
    ZeroLowResolutionBlock,
    LowResolutionBlockTooLarge(u32),
    InvalidZoomWidth(f64),
    InvalidZoomFactor(f64),
}

impl fmt::Display for ZoomConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPaletteSize => write!(f, "palette size must be greater than zero"),
            Self::ZeroLowResolutionBlock => {
                write!(f, "low resolution block size must be greater than zero")
            }
            Self::LowResolutionBlockTooLarge(size) => write!(
                f,
                "low resolution block size must be at most {}, got {}",
                MAX_LOW_RESOLUTION_BLOCK, size
            ),
            Self::InvalidZoomWidth(width) => {
                write!(f, "initial zoom width must be finite and positive, got {}", width)
            }
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be in (0, 1], got {}", factor)
            }
        }
    }
}

impl Error for ZoomConfigError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub plane: ComplexRect,
    pub focus: Complex,
    pub initial_zoom_width: f64,
    pub initial_max_iterations: u32,
    pub zoom_factor: f64,
    pub iteration_step: u32,
    pub palette_size: usize,
    pub low_resolution_block: u32,
    pub sampling: Sampling,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            plane: default_plane(),
            focus: DEFAULT_FOCUS,
            initial_zoom_width: DEFAULT_ZOOM_WIDTH,
            initial_max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            iteration_step: DEFAULT_ITERATION_STEP,
            palette_size: DEFAULT_PALETTE_SIZE,
            low_resolution_block: DEFAULT_LOW_RESOLUTION_BLOCK,
            sampling: Sampling::default(),
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        if self.palette_size == 0 {
            return Err(ZoomConfigError::ZeroPaletteSize);
        }

        if self.low_resolution_block == 0 {
            return Err(ZoomConfigError::ZeroLowResolutionBlock);
        }

        if self.low_resolution_block > MAX_LOW_RESOLUTION_BLOCK {
            return Err(ZoomConfigError::LowResolutionBlockTooLarge(
                self.low_resolution_block,
            ));
        }

        if !(self.initial_zoom_width.is_finite() && self.initial_zoom_width > 0.0) {
            return Err(ZoomConfigError::InvalidZoomWidth(self.initial_zoom_width));
        }

        if !(self.zoom_factor > 0.0 && self.zoom_factor <= 1.0) {
            return Err(ZoomConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        Ok(())
    }
}
