//! Configuration structs with TOML loading and compiled defaults.

pub mod catalog_config;
pub mod defaults;
pub mod dyad_config;
pub mod session_config;

pub use catalog_config::CatalogConfig;
pub use dyad_config::DyadConfig;
pub use session_config::SessionConfig;
