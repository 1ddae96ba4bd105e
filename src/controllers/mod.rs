pub mod ports;
pub mod viewer;
