use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("selection size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// A completed drag selection in full-resolution pixel-index coordinates,
/// drawn against the current viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selection {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Selection {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, SelectionError> {
        if !(width > 0.0) || !(height > 0.0) || !x.is_finite() || !y.is_finite() {
            return Err(SelectionError::InvalidSize { width, height });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_new_valid() {
        let selection = Selection::new(5.0, 6.0, 7.0, 4.0).unwrap();

        assert_eq!(selection.x(), 5.0);
        assert_eq!(selection.y(), 6.0);
        assert_eq!(selection.width(), 7.0);
        assert_eq!(selection.height(), 4.0);
    }

    #[test]
    fn test_selection_rejects_non_positive_extent() {
        assert_eq!(
            Selection::new(0.0, 0.0, 0.0, 4.0),
            Err(SelectionError::InvalidSize {
                width: 0.0,
                height: 4.0
            })
        );
        assert_eq!(
            Selection::new(0.0, 0.0, -7.0, -4.0),
            Err(SelectionError::InvalidSize {
                width: -7.0,
                height: -4.0
            })
        );
        assert!(Selection::new(0.0, 0.0, f64::NAN, 4.0).is_err());
    }
}
