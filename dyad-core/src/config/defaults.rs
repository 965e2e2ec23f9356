//! Compiled configuration defaults.

/// Session lifetime from creation: 24 hours.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

/// Partial type catalogs are accepted by default; absent codes fall
/// back to compositional synthesis.
pub const DEFAULT_REQUIRE_COMPLETE_TYPES: bool = false;
