use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
        point.x,
        point.y,
        pixel_rect.top_left().x,
        pixel_rect.top_left().y,
        pixel_rect.bottom_right().x,
        pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps `value` from `[0, extent]` onto `[start, end]`.
#[inline]
#[must_use]
pub fn lerp(value: f64, extent: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * (value / extent)
}

/// Computes the complex-plane bounds of `viewport`.
///
/// The viewport edges are mapped from the pixel rect onto `window`, the fixed
/// logical region shown when the viewport covers the whole image.
pub fn viewport_to_complex_rect(
    viewport: &Viewport,
    pixel_rect: PixelRect,
    window: ComplexRect,
) -> Result<ComplexRect, ComplexRectError> {
    let width = pixel_rect.width() as f64;
    let height = pixel_rect.height() as f64;
    let top_left = window.top_left();
    let bottom_right = window.bottom_right();

    let real = |x: f64| lerp(x, width, top_left.real, bottom_right.real);
    let imag = |y: f64| lerp(y, height, top_left.imag, bottom_right.imag);

    ComplexRect::new(
        Complex {
            real: real(viewport.x()),
            imag: imag(viewport.y()),
        },
        Complex {
            real: real(viewport.x() + viewport.width()),
            imag: imag(viewport.y() + viewport.height()),
        },
    )
}

/// Maps a pixel onto `bounds`, treating the pixel rect as spanning
/// `[0, width]` so the right and bottom edges stop one pixel short of the
/// bounds.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    bounds: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x - pixel_rect.top_left().x) as f64;
    let relative_pixel_y = (pixel_position.y - pixel_rect.top_left().y) as f64;
    let real = lerp(
        relative_pixel_x,
        pixel_rect.width() as f64,
        bounds.top_left().real,
        bounds.bottom_right().real,
    );
    let imag = lerp(
        relative_pixel_y,
        pixel_rect.height() as f64,
        bounds.top_left().imag,
        bounds.bottom_right().imag,
    );

    Ok(Complex { real, imag })
}
