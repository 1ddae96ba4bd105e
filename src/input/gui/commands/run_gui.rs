use log::info;
use thiserror::Error;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::viewer::config::ViewerConfig;
use crate::controllers::viewer::controller::{ViewerController, ViewerError};
use crate::input::gui::app::GuiApp;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    Viewer(#[from] ViewerError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
}

pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Renders the initial view, opens the window and blocks until it closes.
    pub fn execute(&self) -> Result<(), GuiError> {
        let controller = ViewerController::new(&self.config, PngFilePresenter::new())?;
        let (width, height) = self.config.window_size();

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot")
                .with_inner_size(PhysicalSize::new(width, height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, (width, height), self.config.display_scale)?;
        info!("window {}x{} (scale {})", width, height, self.config.display_scale);

        GuiApp::new(window, presenter, controller).run(event_loop)?;
        Ok(())
    }
}
