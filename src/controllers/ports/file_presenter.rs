use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    type Error: std::error::Error + Send + Sync + 'static;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), Self::Error>;
}
