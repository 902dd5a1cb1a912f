pub mod compute;
pub mod events;
pub mod input;
pub mod ports;
pub mod render;
pub mod viewer;
