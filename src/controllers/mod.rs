pub mod ports;
pub mod zoom;
