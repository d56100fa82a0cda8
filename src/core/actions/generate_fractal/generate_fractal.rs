use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

/// Samples `algorithm` along one row: one result per entry of `columns`, all
/// at imaginary part `imag`.
pub fn generate_fractal_row<Alg: FractalAlgorithm>(
    columns: &[f64],
    imag: f64,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    columns
        .iter()
        .map(|&real| algorithm.compute(Complex { real, imag }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SumAlgorithm;

    impl FractalAlgorithm for SumAlgorithm {
        type Success = f64;

        fn compute(&self, point: Complex) -> Self::Success {
            point.real + 10.0 * point.imag
        }
    }

    #[test]
    fn test_generates_row_in_column_order() {
        let row = generate_fractal_row(&[0.0, 1.0, 2.0], 1.0, &SumAlgorithm);

        assert_eq!(row, vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_empty_columns_produce_empty_row() {
        assert!(generate_fractal_row(&[], 0.0, &SumAlgorithm).is_empty());
    }
}
