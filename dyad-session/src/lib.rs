//! # dyad-session
//!
//! Two-slot session coordination for paired quiz runs: creation,
//! first-come-first-served role assignment, answer upsert, completion,
//! lazy TTL expiry, and the canonical result query string.
//!
//! All access goes through [`SessionStore`]; callers only ever see
//! cloned snapshots, never live map entries.

pub mod result;
pub mod session;
pub mod snapshot;
pub mod store;

// Re-export the most commonly used types at the crate root.
pub use session::{Mutation, ParticipantSlot, Role, Session};
pub use snapshot::{SessionSnapshot, SlotView};
pub use store::SessionStore;
