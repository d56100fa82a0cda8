mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::copy_abgr_to_rgba;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::zoom::ZoomController;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::colour::{Colour, alpha};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::palette::{
    DEFAULT_PALETTE_SIZE, INTERIOR_COLOUR, Palette, build_palette, hsl_to_colour,
};
pub use crate::core::fractals::mandelbrot::renderer::ZoomRenderer;
pub use crate::core::fractals::mandelbrot::zoom::ZoomState;
pub use crate::core::fractals::mandelbrot::zoom_config::{
    DEFAULT_FOCUS, Sampling, ZoomConfig, ZoomConfigError,
};
#[cfg(feature = "gui")]
pub use input::gui::{FRAME_INTERVAL, FRAME_SIZE, run_gui, zoom_input::ZoomInputState};
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
