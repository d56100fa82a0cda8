use crate::core::data::complex::Complex;

/// Per-sample computation run over a grid of complex-plane points.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, point: Complex) -> Self::Success;
}
