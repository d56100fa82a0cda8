use crate::core::data::{complex::Complex, complex_rect::ComplexRect};
use crate::core::fractals::mandelbrot::zoom_config::{
    DEFAULT_ITERATION_STEP, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM_FACTOR, DEFAULT_ZOOM_WIDTH,
    ZoomConfig,
};

/// Animation state threaded through successive frames.
///
/// Each [`ZoomState::advance`] shrinks the viewport geometrically and raises
/// the iteration budget linearly. The budget saturates at `u32::MAX` instead
/// of wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    zoom_width: f64,
    max_iterations: u32,
    initial_zoom_width: f64,
    initial_max_iterations: u32,
    zoom_factor: f64,
    iteration_step: u32,
}

impl ZoomState {
    #[must_use]
    pub fn new(
        initial_zoom_width: f64,
        initial_max_iterations: u32,
        zoom_factor: f64,
        iteration_step: u32,
    ) -> Self {
        Self {
            zoom_width: initial_zoom_width,
            max_iterations: initial_max_iterations,
            initial_zoom_width,
            initial_max_iterations,
            zoom_factor,
            iteration_step,
        }
    }

    #[must_use]
    pub fn from_config(config: &ZoomConfig) -> Self {
        Self::new(
            config.initial_zoom_width,
            config.initial_max_iterations,
            config.zoom_factor,
            config.iteration_step,
        )
    }

    #[must_use]
    pub fn zoom_width(&self) -> f64 {
        self.zoom_width
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn advance(&mut self) {
        self.zoom_width *= self.zoom_factor;
        self.max_iterations = self.max_iterations.saturating_add(self.iteration_step);
    }

    pub fn reset(&mut self) {
        self.zoom_width = self.initial_zoom_width;
        self.max_iterations = self.initial_max_iterations;
    }

    /// Square sub-region of edge `zoom_width` centred on `focus`.
    #[must_use]
    pub fn region(&self, focus: Complex) -> ComplexRect {
        ComplexRect::around(focus, self.zoom_width)
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(
            DEFAULT_ZOOM_WIDTH,
            DEFAULT_MAX_ITERATIONS,
            DEFAULT_ZOOM_FACTOR,
            DEFAULT_ITERATION_STEP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_at_initial_values() {
        let state = ZoomState::default();

        assert_eq!(state.zoom_width(), 0.01);
        assert_eq!(state.max_iterations(), 200);
    }

    #[test]
    fn advance_shrinks_width_and_raises_budget() {
        let mut state = ZoomState::default();

        state.advance();

        assert_eq!(state.zoom_width(), 0.01 * 0.9);
        assert_eq!(state.max_iterations(), 210);
    }

    #[test]
    fn advance_is_geometric_over_many_steps() {
        let mut state = ZoomState::default();
        let mut expected_width = 0.01;

        for _ in 0..50 {
            state.advance();
            expected_width *= 0.9;
        }

        assert_eq!(state.zoom_width(), expected_width);
        assert_eq!(state.max_iterations(), 200 + 10 * 50);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut state = ZoomState::default();
        for _ in 0..7 {
            state.advance();
        }

        state.reset();

        assert_eq!(state, ZoomState::default());
    }

    #[test]
    fn budget_saturates_instead_of_wrapping() {
        let mut state = ZoomState::new(1.0, u32::MAX - 5, 0.5, 10);

        state.advance();

        assert_eq!(state.max_iterations(), u32::MAX);
    }

    #[test]
    fn region_is_centred_on_focus() {
        let state = ZoomState::new(2.0, 10, 0.9, 1);
        let region = state.region(Complex::new(1.0, -1.0));

        assert_eq!(region.top_left(), Complex::new(0.0, -2.0));
        assert_eq!(region.width(), 2.0);
        assert_eq!(region.height(), 2.0);
    }

    #[test]
    fn from_config_uses_config_values() {
        let config = ZoomConfig {
            initial_zoom_width: 0.5,
            initial_max_iterations: 64,
            zoom_factor: 0.5,
            iteration_step: 1,
            ..ZoomConfig::default()
        };
        let mut state = ZoomState::from_config(&config);

        state.advance();

        assert_eq!(state.zoom_width(), 0.25);
        assert_eq!(state.max_iterations(), 65);
    }
}
