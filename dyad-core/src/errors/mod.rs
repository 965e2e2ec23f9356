//! Error handling for the dyad engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod scoring_error;
pub mod session_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use scoring_error::ScoringError;
pub use session_error::SessionError;
