pub mod banded_provider;
pub mod job;
pub mod provider;
pub mod rayon_provider;
