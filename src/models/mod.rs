// Module exports for models

pub mod cabinet;
pub mod geometry;
pub mod settings;
pub mod shift;
