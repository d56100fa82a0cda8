use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

/// Generates the same row as [`generate_fractal_row`] with columns spread
/// over rayon's work-stealing pool.
///
/// Every sample still goes through `algorithm.compute` with identical inputs,
/// so results match the sequential version exactly.
///
/// [`generate_fractal_row`]: super::generate_fractal::generate_fractal_row
pub fn generate_fractal_row_rayon<Alg>(
    columns: &[f64],
    imag: f64,
    algorithm: &Alg,
) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    columns
        .par_iter()
        .map(|&real| algorithm.compute(Complex { real, imag }))
        .collect()
}
