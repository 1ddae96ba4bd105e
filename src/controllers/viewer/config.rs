use std::path::PathBuf;

use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::params::default_region;
use thiserror::Error;

const DEFAULT_IMAGE_WIDTH: u32 = 2100;
const DEFAULT_IMAGE_HEIGHT: u32 = 1200;
const DEFAULT_DISPLAY_SCALE: u32 = 2;
const DEFAULT_SNAPSHOT_DIR: &str = "out";

/// Largest relative difference tolerated between the image aspect ratio and
/// the logical window's.
const ASPECT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("display scale must be greater than zero")]
    ZeroDisplayScale,
    #[error("image size {width}x{height} is not divisible by display scale {scale}")]
    ScaleMismatch { width: u32, height: u32, scale: u32 },
    #[error("displayed image would be {width}x{height}; at least 2x2 is required")]
    DisplayTooSmall { width: u32, height: u32 },
    #[error("image aspect ratio {image:.4} does not match the complex window's {window:.4}")]
    AspectMismatch { image: f64, window: f64 },
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Full render resolution.
    pub image_width: u32,
    pub image_height: u32,
    /// The window shows the image shrunk by this integer factor.
    pub display_scale: u32,
    pub snapshot_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            display_scale: DEFAULT_DISPLAY_SCALE,
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height, scale) = (self.image_width, self.image_height, self.display_scale);

        if scale == 0 {
            return Err(ConfigError::ZeroDisplayScale);
        }

        if width % scale != 0 || height % scale != 0 {
            return Err(ConfigError::ScaleMismatch {
                width,
                height,
                scale,
            });
        }

        let (window_width, window_height) = self.window_size();
        if window_width < 2 || window_height < 2 {
            return Err(ConfigError::DisplayTooSmall {
                width: window_width,
                height: window_height,
            });
        }

        self.pixel_rect()?;

        let image = width as f64 / height as f64;
        let window = default_region().aspect_ratio();
        if ((image - window) / window).abs() > ASPECT_TOLERANCE {
            return Err(ConfigError::AspectMismatch { image, window });
        }

        Ok(())
    }

    /// The fixed full-resolution coordinate system.
    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::from_size(self.image_width, self.image_height)
    }

    /// Physical window size. Only meaningful for a validated config.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        let scale = self.display_scale.max(1);

        (self.image_width / scale, self.image_height / scale)
    }
}
