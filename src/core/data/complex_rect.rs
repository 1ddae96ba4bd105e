use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// An axis-aligned region of the complex plane.
///
/// `top_left` holds the smallest real and imaginary parts; image row 0 maps
/// onto `top_left.imag`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // `!(x > 0.0)` also rejects NaN extents
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds a rect from corners known at compile time to have positive
    /// extent.
    pub(crate) const fn from_fixed_corners(top_left: Complex, bottom_right: Complex) -> Self {
        Self {
            top_left,
            bottom_right,
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

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complex(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = complex(-2.5, -1.0);
        let bottom_right = complex(1.0, 1.0);

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_complex_rect_dimensions() {
        let rect = ComplexRect::new(complex(-2.5, -1.0), complex(1.0, 1.0)).unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.aspect_ratio(), 1.75);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(complex(0.0, 0.0), complex(0.0, 100.0));
        let negative_height = ComplexRect::new(complex(0.0, 0.0), complex(100.0, -10.0));
        let inverted = ComplexRect::new(complex(2.0, 2.0), complex(-2.0, -2.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
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
    fn test_complex_rect_rejects_nan() {
        let rect = ComplexRect::new(complex(f64::NAN, 0.0), complex(1.0, 1.0));

        assert!(rect.is_err());
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect = ComplexRect::new(complex(-10.0, -5.0), complex(100.0, 200.0)).unwrap();

        assert!(rect.contains_point(complex(50.0, 50.0)));
        assert!(rect.contains_point(complex(-10.0, 0.0)));
        assert!(rect.contains_point(complex(100.0, 200.0)));
        assert!(!rect.contains_point(complex(101.0, 50.0)));
        assert!(!rect.contains_point(complex(50.0, -6.0)));
    }
}
