use crate::core::data::colour::Colour;

/// Maps a per-pixel fractal result to a colour. Implementations must be
/// total: every input yields a colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;
}
