use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{info, warn};

use crate::config::{ApiSportsConfig, DashboardConfig};
use crate::error::{FetchError, Result};
use crate::http::get_json;
use crate::models::{ApiResponse, Conference, Game, PlayerGameLine, TeamStanding};

/// Client for the api-sports NBA feed
pub struct ApiSportsClient {
    config: ApiSportsConfig,
    client: Client,
}

impl ApiSportsClient {
    /// Create a client, reading the API key from the environment
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let api_key = config.api_sports_key()?;
        Self::new(config.api_sports.clone(), &api_key)
    }

    pub fn new(config: ApiSportsConfig, api_key: &str) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            FetchError::Config("api-sports key is not a valid header value".to_string())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-key", key);

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET `path` and unwrap the envelope's `response` list
    async fn get_list<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.client.get(self.url(path)).query(query);
        let body: ApiResponse<T> = get_json(request, path).await?;

        body.into_response(path).map_err(|e| {
            warn!("{}", e);
            e
        })
    }

    /// Fetch league standings, optionally for one conference
    pub async fn standings(&self, conference: Option<Conference>) -> Result<Vec<TeamStanding>> {
        let mut query = vec![
            ("league", self.config.league.clone()),
            ("season", self.config.season.clone()),
        ];
        if let Some(conference) = conference {
            query.push(("conference", conference.as_str().to_string()));
        }

        info!("Fetching standings (conference: {:?})", conference);
        let standings: Vec<TeamStanding> = self.get_list("standings", &query).await?;

        info!("Successfully fetched {} team standings", standings.len());
        Ok(standings)
    }

    /// Fetch every game played on `date`
    pub async fn games_on(&self, date: NaiveDate) -> Result<Vec<Game>> {
        let date = date.format("%Y-%m-%d").to_string();
        info!("Fetching games for {}", date);

        let games: Vec<Game> = self.get_list("games", &[("date", date.clone())]).await?;

        info!("Successfully fetched {} games for {}", games.len(), date);
        Ok(games)
    }

    /// Fetch the box score lines of one game
    pub async fn player_statistics(&self, game_id: i64) -> Result<Vec<PlayerGameLine>> {
        info!("Fetching player statistics for game {}", game_id);

        let query = [("game", game_id.to_string())];
        let lines: Vec<PlayerGameLine> = self.get_list("players/statistics", &query).await?;

        info!("Successfully fetched {} player lines for game {}", lines.len(), game_id);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{header, request_line, CannedServer};
    use serde_json::json;

    fn local_client(base_url: &str) -> ApiSportsClient {
        let mut config = DashboardConfig::default().api_sports;
        config.base_url = base_url.to_string();
        config.timeout_secs = 2;
        ApiSportsClient::new(config, "test-key").unwrap()
    }

    fn game_night() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_url_joins_paths() {
        let client = local_client("http://127.0.0.1:1/");
        assert_eq!(client.url("players/statistics"), "http://127.0.0.1:1/players/statistics");
    }

    #[test]
    fn test_rejects_invalid_key() {
        let config = DashboardConfig::default().api_sports;
        assert!(matches!(
            ApiSportsClient::new(config, "bad\nkey"),
            Err(FetchError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let client = local_client("http://127.0.0.1:1/");

        let err = client.games_on(game_night()).await.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_games_on_sends_date_and_key() {
        let body = json!({
            "get": "games",
            "parameters": { "date": "2025-01-15" },
            "errors": [],
            "results": 1,
            "response": [{
                "id": 14001,
                "teams": {
                    "home": { "name": "Boston Celtics", "logo": null },
                    "visitors": { "name": "New York Knicks", "logo": null }
                },
                "scores": {
                    "home": { "points": 132 },
                    "visitors": { "points": 109 }
                }
            }]
        });
        let server = CannedServer::start("200 OK", body.to_string()).await;
        let client = local_client(&server.base_url);

        let games = client.games_on(game_night()).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, 14001);
        assert_eq!(games[0].scores.home.points, Some(132));

        let request = server.request().await;
        assert_eq!(request_line(&request), "GET /games?date=2025-01-15 HTTP/1.1");
        assert_eq!(header(&request, "x-rapidapi-key"), Some("test-key"));
    }

    #[tokio::test]
    async fn test_standings_query_includes_conference() {
        let body = json!({ "errors": [], "response": [] });
        let server = CannedServer::start("200 OK", body.to_string()).await;
        let client = local_client(&server.base_url);

        assert!(client.standings(Some(Conference::West)).await.unwrap().is_empty());

        let request = server.request().await;
        assert_eq!(
            request_line(&request),
            "GET /standings?league=standard&season=2024&conference=west HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_reported_errors_are_not_an_empty_night() {
        let body = json!({
            "get": "games",
            "errors": { "token": "Error/Missing application key." },
            "results": 0,
            "response": []
        });
        let server = CannedServer::start("200 OK", body.to_string()).await;
        let client = local_client(&server.base_url);

        let err = client.games_on(game_night()).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Provider { ref endpoint, ref message }
                if endpoint == "games" && message.contains("Missing application key")
        ));
    }
}
