use log::debug;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::selection::{Selection, SelectionError};

/// Tracks a left-button drag in full-resolution pixel coordinates.
///
/// The selection height follows its width at the image aspect ratio, so the
/// zoomed view is never distorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDrag {
    #[default]
    Idle,
    Dragging { anchor: Point, width: i32 },
    /// Escape was pressed mid-drag; ignore the cursor until release.
    Cancelled,
}

fn aspect_locked_selection(
    anchor: Point,
    width: i32,
    pixel_rect: PixelRect,
) -> Result<Selection, SelectionError> {
    let width = width as f64;
    let height = width / pixel_rect.width() as f64 * pixel_rect.height() as f64;

    Selection::new(anchor.x as f64, anchor.y as f64, width, height)
}

impl SelectionDrag {
    pub fn begin(&mut self, anchor: Point) {
        debug!("selection drag started at ({}, {})", anchor.x, anchor.y);
        *self = Self::Dragging { anchor, width: 0 };
    }

    pub fn update(&mut self, cursor: Point) {
        if let Self::Dragging { anchor, width } = self {
            *width = cursor.x.saturating_sub(anchor.x);
        }
    }

    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("selection drag cancelled");
            *self = Self::Cancelled;
        }
    }

    /// Ends the drag. Returns the selection if it has a positive extent.
    pub fn finish(&mut self, pixel_rect: PixelRect) -> Option<Selection> {
        let Self::Dragging { anchor, width } = std::mem::take(self) else {
            return None;
        };

        match aspect_locked_selection(anchor, width, pixel_rect) {
            Ok(selection) => Some(selection),
            Err(err) => {
                debug!("selection drag discarded: {}", err);
                None
            }
        }
    }

    /// The in-progress selection, if it currently has a positive extent.
    #[must_use]
    pub fn current(&self, pixel_rect: PixelRect) -> Option<Selection> {
        match *self {
            Self::Dragging { anchor, width } => {
                aspect_locked_selection(anchor, width, pixel_rect).ok()
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_rect() -> PixelRect {
        PixelRect::from_size(1400, 800).unwrap()
    }

    #[test]
    fn test_drag_produces_aspect_locked_selection() {
        let mut drag = SelectionDrag::default();

        drag.begin(Point { x: 100, y: 40 });
        drag.update(Point { x: 450, y: 999 });

        assert_eq!(
            drag.finish(pixel_rect()),
            Some(Selection::new(100.0, 40.0, 350.0, 200.0).unwrap())
        );
        assert_eq!(drag, SelectionDrag::Idle);
    }

    #[test]
    fn test_current_tracks_cursor_while_dragging() {
        let mut drag = SelectionDrag::default();
        drag.begin(Point { x: 0, y: 0 });

        assert_eq!(drag.current(pixel_rect()), None);

        drag.update(Point { x: 700, y: 0 });

        assert_eq!(
            drag.current(pixel_rect()),
            Some(Selection::new(0.0, 0.0, 700.0, 400.0).unwrap())
        );
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_click_without_movement_is_discarded() {
        let mut drag = SelectionDrag::default();
        drag.begin(Point { x: 10, y: 10 });

        assert_eq!(drag.finish(pixel_rect()), None);
        assert_eq!(drag, SelectionDrag::Idle);
    }

    #[test]
    fn test_dragging_left_of_anchor_is_discarded() {
        let mut drag = SelectionDrag::default();
        drag.begin(Point { x: 500, y: 10 });
        drag.update(Point { x: 200, y: 300 });

        assert_eq!(drag.current(pixel_rect()), None);
        assert_eq!(drag.finish(pixel_rect()), None);
    }

    #[test]
    fn test_cancelled_drag_ignores_cursor_until_release() {
        let mut drag = SelectionDrag::default();
        drag.begin(Point { x: 0, y: 0 });
        drag.update(Point { x: 300, y: 0 });

        drag.cancel();
        drag.update(Point { x: 600, y: 0 });

        assert_eq!(drag, SelectionDrag::Cancelled);
        assert_eq!(drag.current(pixel_rect()), None);
        assert_eq!(drag.finish(pixel_rect()), None);
        assert_eq!(drag, SelectionDrag::Idle);
    }

    #[test]
    fn test_cancel_when_idle_does_nothing() {
        let mut drag = SelectionDrag::default();

        drag.cancel();

        assert_eq!(drag, SelectionDrag::Idle);
    }

    #[test]
    fn test_update_without_begin_does_nothing() {
        let mut drag = SelectionDrag::default();

        drag.update(Point { x: 10, y: 10 });

        assert_eq!(drag.finish(pixel_rect()), None);
    }
}
