pub mod frames;
pub mod signal;
pub mod state;
