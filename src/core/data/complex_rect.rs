use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// An axis-aligned region of the complex plane, stored as two corners.
///
/// Width and height are always derived from the corners rather than stored,
/// so a square built with [`ComplexRect::around`] reports the extent that
/// floating point actually produced, not the requested edge length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Square of edge `edge` centred on `centre`.
    ///
    /// Not validated: a zoom that has shrunk below f64 resolution yields a
    /// degenerate square, which the renderer still has to draw.
    #[must_use]
    pub fn around(centre: Complex, edge: f64) -> Self {
        let half = edge / 2.0;

        Self {
            top_left: Complex::new(centre.real - half, centre.imag - half),
            bottom_right: Complex::new(centre.real + half, centre.imag + half),
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex::new(-2.0, -1.5);
        let bottom_right = Complex::new(2.0, 1.5);

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 3.0);
    }

    #[test]
    fn test_complex_rect_rejects_empty_and_inverted() {
        let zero_width = ComplexRect::new(Complex::new(1.0, 0.0), Complex::new(1.0, 2.0));
        let inverted = ComplexRect::new(Complex::new(2.0, 2.0), Complex::new(-2.0, -2.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 2.0
            })
        );
        assert_eq!(
            inverted,
            Err(ComplexRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_extent() {
        let rect = ComplexRect::new(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 1.0));

        assert!(rect.is_err());
    }

    #[test]
    fn test_around_is_centred_square() {
        let rect = ComplexRect::around(Complex::new(0.5, -0.25), 1.0);

        assert_eq!(rect.top_left(), Complex::new(0.0, -0.75));
        assert_eq!(rect.bottom_right(), Complex::new(1.0, 0.25));
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 1.0);
    }

    #[test]
    fn test_around_allows_degenerate_square() {
        let rect = ComplexRect::around(Complex::new(-0.7, 0.1), 0.0);

        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }
}
