pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod next_viewport;
pub mod render_viewport;
