//! Infrastructure layer: external integrations.

pub mod credentials;
pub mod github;
