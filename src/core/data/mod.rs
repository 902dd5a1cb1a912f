pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod render_params;
pub mod resolution;
pub mod screen;
pub mod viewport;
