use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PixelToComplexCoordsError};

/// Counts iterations of `z <- z^2 + c` from `z = 0` until `|z|^2 > 4` or
/// `max_iterations` is reached.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let (x0, y0) = (c.real, c.imag);
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let (mut x2, mut y2) = (0.0_f64, 0.0_f64);
    let mut iteration = 0;

    while x2 + y2 <= 4.0 && iteration < max_iterations {
        y = 2.0 * x * y + y0;
        x = x2 - y2 + x0;
        x2 = x * x;
        y2 = y * y;
        iteration += 1;
    }

    iteration
}

/// Escape-time Mandelbrot over `bounds`, sampled on `pixel_rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    bounds: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.bounds)?;

        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        bounds: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            bounds,
            max_iterations,
        })
    }
}
