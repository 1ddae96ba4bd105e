pub mod config;
pub mod controller;
pub mod selection_drag;
