use crate::core::data::{complex::Complex, complex_rect::ComplexRect};

/// Iteration bound for every render; not configurable at runtime.
pub const MAX_ITERATIONS: u32 = 500;

/// The logical window `[-2.5, 1.0] x [-1.0, 1.0]` shown by the full viewport.
#[must_use]
pub const fn default_region() -> ComplexRect {
    ComplexRect::from_fixed_corners(
        Complex {
            real: -2.5,
            imag: -1.0,
        },
        Complex {
            real: 1.0,
            imag: 1.0,
        },
    )
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    region: ComplexRect,
    max_iterations: u32,
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            region: default_region(),
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl MandelbrotParams {
    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = MandelbrotParams::default();

        assert_eq!(params.max_iterations(), 500);
        assert_eq!(params.region().width(), 3.5);
        assert_eq!(params.region().height(), 2.0);
        assert_eq!(params.region().top_left(), Complex { real: -2.5, imag: -1.0 });
    }

    #[test]
    fn test_default_region_passes_validation() {
        let region = default_region();

        assert_eq!(
            ComplexRect::new(region.top_left(), region.bottom_right()),
            Ok(region)
        );
        assert_eq!(region.bottom_right(), Complex { real: 1.0, imag: 1.0 });
    }
}
