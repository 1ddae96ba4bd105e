pub mod render_viewport;
