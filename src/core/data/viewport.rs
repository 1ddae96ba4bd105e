use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("viewport origin must be finite: ({x}, {y})")]
    NonFiniteOrigin { x: f64, y: f64 },
}

/// The region of the logical complex-plane window currently being rendered,
/// in the pixel-index units of the full-resolution image.
///
/// `{0, 0, width, height}` is the whole window; anything smaller is a zoom.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if !x.is_finite() || !y.is_finite() {
            return Err(ViewportError::NonFiniteOrigin { x, y });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// The viewport covering the whole logical window.
    #[must_use]
    pub fn full(pixel_rect: PixelRect) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: pixel_rect.width() as f64,
            height: pixel_rect.height() as f64,
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// How many times narrower this viewport is than `pixel_rect`.
    #[must_use]
    pub fn zoom_factor(&self, pixel_rect: PixelRect) -> f64 {
        pixel_rect.width() as f64 / self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(10.0, 20.0, 30.5, 40.25).unwrap();

        assert_eq!(viewport.x(), 10.0);
        assert_eq!(viewport.y(), 20.0);
        assert_eq!(viewport.width(), 30.5);
        assert_eq!(viewport.height(), 40.25);
    }

    #[test]
    fn test_viewport_rejects_non_positive_size() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 10.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 10.0
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 10.0, -1.0),
            Err(ViewportError::InvalidSize {
                width: 10.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_values() {
        assert!(Viewport::new(0.0, 0.0, f64::NAN, 10.0).is_err());
        assert!(Viewport::new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
        assert!(matches!(
            Viewport::new(f64::NAN, 0.0, 10.0, 10.0),
            Err(ViewportError::NonFiniteOrigin { .. })
        ));
    }

    #[test]
    fn test_full_viewport_covers_pixel_rect() {
        let pixel_rect = PixelRect::from_size(350, 200).unwrap();
        let viewport = Viewport::full(pixel_rect);

        assert_eq!(viewport, Viewport::new(0.0, 0.0, 350.0, 200.0).unwrap());
        assert_eq!(viewport.zoom_factor(pixel_rect), 1.0);
    }

    #[test]
    fn test_zoom_factor() {
        let pixel_rect = PixelRect::from_size(350, 200).unwrap();
        let viewport = Viewport::new(100.0, 50.0, 35.0, 20.0).unwrap();

        assert_eq!(viewport.zoom_factor(pixel_rect), 10.0);
    }
}
