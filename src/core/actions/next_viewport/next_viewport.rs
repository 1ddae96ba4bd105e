use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::selection::Selection;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Converts a selection drawn over the image of `current` into the viewport
/// it shows, in the same fixed pixel-index system.
///
/// Each axis is a linear interpolation: the selection is taken as a fraction
/// of the image and applied to the current viewport, so zooms compose.
pub fn next_viewport(
    current: &Viewport,
    selection: &Selection,
    pixel_rect: PixelRect,
) -> Result<Viewport, ViewportError> {
    let width = pixel_rect.width() as f64;
    let height = pixel_rect.height() as f64;

    Viewport::new(
        current.x() + current.width() * selection.x() / width,
        current.y() + current.height() * selection.y() / height,
        current.width() * selection.width() / width,
        current.height() * selection.height() / height,
    )
}
