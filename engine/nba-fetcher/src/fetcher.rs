use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use reqwest::Client;
use tracing::info;

use crate::config::NbaStatsConfig;
use crate::error::{FetchError, Result};
use crate::http::get_json;
use crate::models::StatsResponse;
use crate::roster::{parse_roster, RosterDirectory, RosterEntry};

const ALL_PLAYERS_ENDPOINT: &str = "commonallplayers";

/// Roster directory backed by stats.nba.com
pub struct NbaStatsFetcher {
    config: NbaStatsConfig,
    client: Client,
}

impl NbaStatsFetcher {
    /// Create a new fetcher instance
    pub fn new(config: NbaStatsConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, header_value(&config.referer)?);
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Fetch every player on an active roster for `season`
    pub async fn fetch_all_players(&self, season: &str) -> Result<Vec<RosterEntry>> {
        let base_url = self.config.base_url.trim_end_matches('/');
        let url = format!("{}/{}", base_url, ALL_PLAYERS_ENDPOINT);
        info!("Fetching {} roster from: {}", season, url);

        let request = self.client.get(&url).query(&[
            ("LeagueID", self.config.league_id.as_str()),
            ("Season", season),
            ("IsOnlyCurrentSeason", "1"),
        ]);

        let response: StatsResponse = get_json(request, ALL_PLAYERS_ENDPOINT).await?;
        let roster = parse_roster(&response)?;

        // An unrecognised season label comes back as an empty table
        if roster.is_empty() {
            return Err(FetchError::Schema(format!(
                "no active players returned for season {season}"
            )));
        }

        info!("Successfully fetched {} active players for {}", roster.len(), season);
        Ok(roster)
    }

    /// Default season from configuration
    pub fn default_season(&self) -> &str {
        &self.config.season
    }
}

#[async_trait]
impl RosterDirectory for NbaStatsFetcher {
    async fn fetch_roster(&self, season: &str) -> Result<Vec<RosterEntry>> {
        self.fetch_all_players(season).await
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| FetchError::Config(format!("invalid header value {value:?}: {e}")))
}
