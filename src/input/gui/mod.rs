//! Windowed front end: winit for the window and input, pixels for the
//! framebuffer.

pub mod app;
pub mod commands;
