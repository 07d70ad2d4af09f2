//! NBA Fetcher
//!
//! HTTP clients for the two providers behind the nightly dashboard:
//! the stats.nba.com roster directory (used to resolve player identities) and
//! the api-sports feed (standings, games and box scores).

pub mod api_sports;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
mod http;
pub mod models;
pub mod roster;

#[cfg(test)]
mod test_server;

pub use api_sports::ApiSportsClient;
pub use cache::CachedRosterDirectory;
pub use config::DashboardConfig;
pub use error::{FetchError, Result};
pub use fetcher::NbaStatsFetcher;
pub use models::*;
pub use roster::{parse_roster, RosterDirectory, RosterEntry};
