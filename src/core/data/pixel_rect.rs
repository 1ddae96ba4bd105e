use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be at least 2x2: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// An inclusive rectangle of pixel indices.
///
/// The image coordinate system is the rect anchored at `(0, 0)`; viewports
/// and selections are expressed in its units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = (bottom_right.x as i64) - (top_left.x as i64);
        let dy = (bottom_right.y as i64) - (top_left.y as i64);

        let width = dx + if dx >= 0 { 1 } else { -1 };
        let height = dy + if dy >= 0 { 1 } else { -1 };

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds the rect covering `(0, 0)..=(width - 1, height - 1)`.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let max = i32::MAX as u32;

        if width < 2 || height < 2 || width > max || height > max {
            return Err(PixelRectError::InvalidSize {
                width: width as i64,
                height: height as i64,
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Row-major iterator over every pixel in the rect.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (left, right) = (self.top_left.x, self.bottom_right.x);

        (self.top_left.y..=self.bottom_right.y)
            .flat_map(move |y| (left..=right).map(move |x| Point { x, y }))
    }
}
