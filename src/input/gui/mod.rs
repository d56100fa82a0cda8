//! GUI input adapter for the zoom animation.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer presentation.

mod app;
pub mod zoom_input;

pub use app::{FRAME_INTERVAL, FRAME_SIZE, run_gui};
