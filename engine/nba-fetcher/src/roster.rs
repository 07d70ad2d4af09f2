use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FetchError, Result};
use crate::models::{ResultSet, StatsResponse};

/// Column holding the numeric player identifier
pub const PERSON_ID_COLUMN: &str = "PERSON_ID";

/// Column holding the "First Last" display name
pub const DISPLAY_NAME_COLUMN: &str = "DISPLAY_FIRST_LAST";

/// One active player on a season roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name as the provider spells it (e.g., "LeBron James")
    pub display_name: String,

    /// Provider person identifier (e.g., 2544)
    pub person_id: i64,
}

impl RosterEntry {
    pub fn new(display_name: impl Into<String>, person_id: i64) -> Self {
        Self {
            display_name: display_name.into(),
            person_id,
        }
    }
}

/// Source of season rosters.
///
/// Implementations return entries in provider order and must not return a
/// partial roster: either every row is delivered or the call fails.
#[async_trait]
pub trait RosterDirectory: Send + Sync {
    async fn fetch_roster(&self, season: &str) -> Result<Vec<RosterEntry>>;
}

/// Turn a `commonallplayers` payload into roster entries.
///
/// Columns are located by header name; the provider does not guarantee their order.
pub fn parse_roster(response: &StatsResponse) -> Result<Vec<RosterEntry>> {
    let set = response
        .result_sets
        .first()
        .ok_or_else(|| FetchError::Schema("response contains no result sets".to_string()))?;

    let id_idx = set.column(PERSON_ID_COLUMN)?;
    let name_idx = set.column(DISPLAY_NAME_COLUMN)?;

    set.row_set
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            let person_id = row.get(id_idx).and_then(Value::as_i64).ok_or_else(|| {
                FetchError::Schema(format!("row {row_no}: {PERSON_ID_COLUMN} is not an integer"))
            })?;
            let display_name = row.get(name_idx).and_then(Value::as_str).ok_or_else(|| {
                FetchError::Schema(format!("row {row_no}: {DISPLAY_NAME_COLUMN} is not a string"))
            })?;
            Ok(RosterEntry::new(display_name, person_id))
        })
        .collect()
}

impl ResultSet {
    /// Position of a named column
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                FetchError::Schema(format!("missing column {name} in result set '{}'", self.name))
            })
    }
}
