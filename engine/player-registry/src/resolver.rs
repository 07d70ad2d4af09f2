use nba_fetcher::{Result, RosterDirectory, RosterEntry};
use tracing::{debug, info};

use crate::types::Resolution;

/// Resolves free-text player names to person IDs.
///
/// Every call fetches the roster through the directory it was built with;
/// wrap the directory in a `CachedRosterDirectory` to avoid refetching.
pub struct IdentityResolver<D> {
    directory: D,
}

impl<D: RosterDirectory> IdentityResolver<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Resolve `raw_name` against the active roster for `season`.
    ///
    /// Roster fetch failures propagate; "no match" is `Ok(Resolution::NotFound)`.
    pub async fn resolve(&self, raw_name: &str, season: &str) -> Result<Resolution> {
        let roster = self.directory.fetch_roster(season).await?;
        let resolution = resolve_in_roster(&roster, raw_name);

        info!("Resolved '{}' for {}: {}", raw_name.trim(), season, resolution);
        Ok(resolution)
    }

    /// Resolve a name straight to its headshot URL
    pub async fn fetch_headshot_url(&self, raw_name: &str, season: &str) -> Result<String> {
        Ok(self.resolve(raw_name, season).await?.headshot_url())
    }
}

/// Trim, collapse whitespace runs to one space, lowercase
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Match a name against a roster: exact pass first, then substring pass.
///
/// Both passes walk the roster in provider order, so ties go to the earlier row.
/// A blank name is a substring of every name and lands on the first row.
pub fn resolve_in_roster(roster: &[RosterEntry], raw_name: &str) -> Resolution {
    let query = normalize_name(raw_name);
    let names: Vec<String> = roster
        .iter()
        .map(|entry| normalize_name(&entry.display_name))
        .collect();

    if let Some(idx) = names.iter().position(|name| *name == query) {
        return Resolution::Exact(roster[idx].person_id);
    }

    if let Some(idx) = names.iter().position(|name| name.contains(&query)) {
        debug!("'{}' partially matched '{}'", query, roster[idx].display_name);
        return Resolution::Partial(roster[idx].person_id);
    }

    Resolution::NotFound
}
