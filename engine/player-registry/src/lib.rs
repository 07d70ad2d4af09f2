//! Player Registry - Maps player names to NBA identities
//!
//! Resolves free-text player names against the active season roster and
//! turns the resulting person ID into a headshot image URL.

pub mod headshot;
pub mod resolver;
pub mod types;

pub use headshot::{build_headshot_url, FALLBACK_HEADSHOT_URL};
pub use resolver::{normalize_name, resolve_in_roster, IdentityResolver};
pub use types::{Resolution, SENTINEL_PLAYER_ID};
