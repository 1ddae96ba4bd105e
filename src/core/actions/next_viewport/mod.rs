pub mod next_viewport;
