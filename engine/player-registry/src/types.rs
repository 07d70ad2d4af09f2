use std::fmt;

/// Legacy "no identifier found" marker. Never a real person ID.
pub const SENTINEL_PLAYER_ID: i64 = -1;

/// Outcome of resolving a player name against a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A roster name equals the query
    Exact(i64),

    /// No exact match; a roster name contains the query
    Partial(i64),

    /// Nothing on the roster matched
    NotFound,
}

impl Resolution {
    /// The resolved person ID, if any
    pub fn player_id(&self) -> Option<i64> {
        match self {
            Resolution::Exact(id) | Resolution::Partial(id) => Some(*id),
            Resolution::NotFound => None,
        }
    }

    /// Person ID, or `SENTINEL_PLAYER_ID` when nothing matched
    pub fn sentinel_id(&self) -> i64 {
        self.player_id().unwrap_or(SENTINEL_PLAYER_ID)
    }

    pub fn is_found(&self) -> bool {
        self.player_id().is_some()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Exact(id) => write!(f, "exact match {id}"),
            Resolution::Partial(id) => write!(f, "partial match {id}"),
            Resolution::NotFound => write!(f, "not found"),
        }
    }
}
