//! Domain layer: errors and payload models.

pub mod errors;
pub mod models;
