pub mod algorithm;
pub mod palette;
pub mod renderer;
pub mod zoom;
pub mod zoom_config;
