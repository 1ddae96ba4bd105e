use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::hsv_escape::MandelbrotHsvColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::{viewport_to_complex_rect, PixelToComplexCoordsError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderViewportError {
    #[error("viewport bounds collapsed at this precision: {0}")]
    DegenerateBounds(#[from] ComplexRectError),
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    PixelMapping(#[from] PixelToComplexCoordsError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Renders `viewport` into a fresh buffer covering `pixel_rect`.
///
/// The viewport's complex bounds are computed once, then every pixel is
/// interpolated within them, iterated and coloured.
pub fn render_viewport(
    viewport: &Viewport,
    pixel_rect: PixelRect,
    params: &MandelbrotParams,
) -> Result<PixelBuffer, RenderViewportError> {
    let bounds = viewport_to_complex_rect(viewport, pixel_rect, params.region())?;
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, bounds, params.max_iterations())?;
    let iterations = generate_fractal(pixel_rect, &algorithm)?;
    let colour_map = MandelbrotHsvColourMap::new(params.max_iterations());

    Ok(generate_pixel_buffer(iterations, &colour_map, pixel_rect)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn pixel_rect() -> PixelRect {
        PixelRect::from_size(35, 20).unwrap()
    }

    #[test]
    fn test_render_fills_every_pixel_opaque() {
        let buffer =
            render_viewport(&Viewport::full(pixel_rect()), pixel_rect(), &MandelbrotParams::default())
                .unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect());
        assert_eq!(buffer.buffer_size(), 35 * 20 * 4);
        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_render_full_view_known_pixels() {
        let buffer =
            render_viewport(&Viewport::full(pixel_rect()), pixel_rect(), &MandelbrotParams::default())
                .unwrap();

        // (0, 0) is c = -2.5 - 1i, escaping after one iteration: hue 360/500
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::opaque(255, 3, 0));
        // (25, 10) is c = 0 + 0i, inside the set
        assert_eq!(buffer.pixel(Point { x: 25, y: 10 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_render_is_deterministic() {
        let viewport = Viewport::new(10.0, 4.0, 14.0, 8.0).unwrap();
        let params = MandelbrotParams::default();

        let first = render_viewport(&viewport, pixel_rect(), &params).unwrap();
        let second = render_viewport(&viewport, pixel_rect(), &params).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zoomed_render_differs_from_full_render() {
        let params = MandelbrotParams::default();
        let full = render_viewport(&Viewport::full(pixel_rect()), pixel_rect(), &params).unwrap();
        let zoomed =
            render_viewport(&Viewport::new(10.0, 4.0, 14.0, 8.0).unwrap(), pixel_rect(), &params)
                .unwrap();

        assert_ne!(full.buffer(), zoomed.buffer());
    }

    #[test]
    fn test_collapsed_bounds_are_reported() {
        let viewport = Viewport::new(1.0e300, 0.0, 1.0e-300, 20.0).unwrap();

        let result = render_viewport(&viewport, pixel_rect(), &MandelbrotParams::default());

        assert!(matches!(result, Err(RenderViewportError::DegenerateBounds(_))));
    }
}
