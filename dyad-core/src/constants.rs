/// Dyad engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of personality axes.
pub const AXIS_COUNT: usize = 3;

/// Trait values per axis.
pub const TRAITS_PER_AXIS: usize = 3;

/// Size of the closed personality-type universe (3 × 3 × 3).
pub const TYPE_UNIVERSE: usize = 27;

/// Ordered type pairs in the compatibility universe (27 × 27).
pub const PAIR_UNIVERSE: usize = 729;
