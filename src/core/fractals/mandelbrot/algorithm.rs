use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time counts for one frame's iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, point: Complex) -> Self::Success {
        escape_time(point, self.max_iterations)
    }
}

/// Escape-time count for `c` under `z ← z² + c`, starting from `z = c`.
///
/// The counter is bumped before the budget check, so the first step always
/// runs and a point that escapes on it reports 1. Points still bounded when the
/// counter reaches `max_iterations` report `max_iterations`; a budget of 0 or 1
/// reports 1 without stepping.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let Complex { real: x0, imag: y0 } = c;
    let mut x1 = x0;
    let mut y1 = y0;
    let mut n = 0;

    loop {
        n += 1;
        if n >= max_iterations {
            break;
        }

        let x2 = x1 * x1;
        let y2 = y1 * y1;
        y1 = 2.0 * x1 * y1 + y0;
        x1 = x2 - y2 + x0;

        if x2 + y2 >= ESCAPE_RADIUS_SQUARED {
            break;
        }
    }

    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [2, 200, 1000, 10_000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_far_point_escapes_on_first_step() {
        assert_eq!(escape_time(Complex::new(2.0, 2.0), 200), 1);
    }

    #[test]
    fn test_escape_threshold_is_inclusive() {
        // z: 1 -> 2, |2|² == 4 ends the loop on the second step
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 200), 2);
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 200), 1);
    }

    #[test]
    fn test_slow_escape_counts_steps() {
        assert_eq!(escape_time(Complex::new(0.5, 0.0), 200), 5);
    }

    #[test]
    fn test_budget_caps_count() {
        assert_eq!(escape_time(Complex::new(0.5, 0.0), 3), 3);
    }

    #[test]
    fn test_degenerate_budgets_report_one() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 1);
        assert_eq!(escape_time(Complex::new(2.0, 2.0), 1), 1);
    }

    #[test]
    fn test_algorithm_uses_its_budget() {
        let algorithm = MandelbrotAlgorithm::new(250);

        assert_eq!(algorithm.max_iterations(), 250);
        assert_eq!(algorithm.compute(Complex::new(0.0, 0.0)), 250);
        assert_eq!(algorithm.compute(Complex::new(2.0, 2.0)), 1);
    }

    #[test]
    fn test_main_cardioid_point_hits_budget() {
        assert_eq!(escape_time(Complex::new(-0.5, 0.25), 500), 500);
    }
}
