pub mod compute;
pub mod data;
pub mod escape;
pub mod util;
