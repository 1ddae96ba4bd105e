use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewer::config::{ConfigError, ViewerConfig};
use crate::core::actions::next_viewport::next_viewport::next_viewport;
use crate::core::actions::render_viewport::render_viewport::{render_viewport, RenderViewportError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::selection::Selection;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid viewer configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error("render failed: {0}")]
    Render(#[from] RenderViewportError),
    #[error("zoom rejected: {0}")]
    Viewport(#[from] ViewportError),
    #[error("failed to write snapshot: {0}")]
    Snapshot(Box<dyn std::error::Error + Send + Sync>),
}

/// Owns the current viewport and its rendered image.
///
/// Every operation either replaces both together or leaves both untouched, so
/// the buffer always shows the viewport.
pub struct ViewerController<P: FilePresenterPort> {
    presenter: P,
    pixel_rect: PixelRect,
    params: MandelbrotParams,
    viewport: Viewport,
    buffer: PixelBuffer,
    snapshot_dir: PathBuf,
}

impl<P: FilePresenterPort> ViewerController<P> {
    /// Validates `config` and renders the full window.
    pub fn new(config: &ViewerConfig, presenter: P) -> Result<Self, ViewerError> {
        config.validate()?;

        let pixel_rect = config.pixel_rect()?;
        let params = MandelbrotParams::default();
        let viewport = Viewport::full(pixel_rect);
        let buffer = render(&viewport, pixel_rect, &params)?;

        Ok(Self {
            presenter,
            pixel_rect,
            params,
            viewport,
            buffer,
            snapshot_dir: config.snapshot_dir.clone(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// Returns to the full window.
    pub fn reset(&mut self) -> Result<(), ViewerError> {
        let viewport = Viewport::full(self.pixel_rect);

        self.buffer = render(&viewport, self.pixel_rect, &self.params)?;
        self.viewport = viewport;

        info!("view reset");
        Ok(())
    }

    /// Zooms into `selection`. On failure the previous view is kept.
    pub fn zoom(&mut self, selection: &Selection) -> Result<(), ViewerError> {
        let result = next_viewport(&self.viewport, selection, self.pixel_rect)
            .map_err(ViewerError::from)
            .and_then(|viewport| {
                let buffer = render(&viewport, self.pixel_rect, &self.params)?;
                Ok((viewport, buffer))
            });

        match result {
            Ok((viewport, buffer)) => {
                self.viewport = viewport;
                self.buffer = buffer;
                info!(
                    "zoomed to {:.3e}x",
                    self.viewport.zoom_factor(self.pixel_rect)
                );
                Ok(())
            }
            Err(err) => {
                warn!("keeping previous view: {}", err);
                Err(err)
            }
        }
    }

    /// Saves the current image as `out_<unix seconds>.png` in the snapshot
    /// directory and returns the path written.
    pub fn snapshot(&self) -> Result<PathBuf, ViewerError> {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or_default();
        let filepath = self.snapshot_dir.join(format!("out_{}.png", seconds));

        self.write(&filepath)?;
        Ok(filepath)
    }

    /// Writes the current image to `filepath` through the presenter.
    pub fn write(&self, filepath: &Path) -> Result<(), ViewerError> {
        self.presenter
            .present(&self.buffer, filepath)
            .map_err(|err| ViewerError::Snapshot(Box::new(err)))?;

        info!("saved {}", filepath.display());
        Ok(())
    }
}

fn render(
    viewport: &Viewport,
    pixel_rect: PixelRect,
    params: &MandelbrotParams,
) -> Result<PixelBuffer, RenderViewportError> {
    debug!(
        "rendering viewport x={} y={} w={} h={}",
        viewport.x(),
        viewport.y(),
        viewport.width(),
        viewport.height()
    );

    let start = Instant::now();
    let buffer = render_viewport(viewport, pixel_rect, params)?;

    info!(
        "rendered {}x{} in {:?}",
        pixel_rect.width(),
        pixel_rect.height(),
        start.elapsed()
    );

    Ok(buffer)
}
