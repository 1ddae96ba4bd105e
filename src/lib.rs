pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::viewer::config::ViewerConfig;
pub use controllers::viewer::controller::{ViewerController, ViewerError};
pub use presenters::file::png::PngFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
