pub mod app;
pub mod channel;
