//! Input adapters for the viewer.
//!
//! Translate window and device input into viewer controller calls.

#[cfg(feature = "gui")]
pub mod gui;
