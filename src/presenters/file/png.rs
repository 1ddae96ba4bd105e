use std::path::Path;

use image::ColorType;
use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to create snapshot directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode png: {0}")]
    Image(#[from] image::ImageError),
}

/// Writes buffers as 8-bit RGBA PNG files, creating parent directories as
/// needed.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    type Error = SnapshotError;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), Self::Error> {
        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pixel_rect = buffer.pixel_rect();

        image::save_buffer(
            filepath,
            buffer.buffer(),
            pixel_rect.width(),
            pixel_rect.height(),
            ColorType::Rgba8,
        )?;

        Ok(())
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
