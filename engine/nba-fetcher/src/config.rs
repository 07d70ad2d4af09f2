use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::{FetchError, Result};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Configuration for the nightly dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// stats.nba.com configuration (roster directory)
    pub nba_stats: NbaStatsConfig,

    /// api-sports configuration (standings, games, box scores)
    pub api_sports: ApiSportsConfig,

    /// Optional roster caching
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NbaStatsConfig {
    /// Base URL of the stats API
    pub base_url: String,

    /// League identifier ("00" is the NBA)
    pub league_id: String,

    /// Default season label (e.g., "2024-25")
    pub season: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Browser user agent; the stats API rejects unknown clients
    pub user_agent: String,

    /// Referer header sent with every request
    pub referer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSportsConfig {
    /// Base URL of the api-sports NBA feed
    pub base_url: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// League name ("standard" is the regular NBA)
    pub league: String,

    /// Season year as api-sports labels it (e.g., "2024")
    pub season: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Roster cache lifetime in seconds; 0 disables caching
    pub roster_ttl_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            nba_stats: NbaStatsConfig {
                base_url: "https://stats.nba.com/stats".to_string(),
                league_id: "00".to_string(),
                season: "2024-25".to_string(),
                timeout_secs: 10,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
                referer: "https://www.nba.com/".to_string(),
            },
            api_sports: ApiSportsConfig {
                base_url: "https://v2.nba.api-sports.io".to_string(),
                api_key_env: "NBA_API_SPORTS_KEY".to_string(),
                league: "standard".to_string(),
                season: "2024".to_string(),
                timeout_secs: 10,
            },
            cache: CacheConfig { roster_ttl_secs: 0 },
        }
    }
}

impl DashboardConfig {
    /// Load configuration: defaults, then an optional TOML file, then
    /// `DASHBOARD__SECTION__KEY` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            debug!("Reading configuration file {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config: Self = builder
            // Values stay strings here; "00" must not turn into 0
            .add_source(Environment::with_prefix(env_prefix).separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.nba_stats.timeout_secs == 0 || self.api_sports.timeout_secs == 0 {
            return Err(FetchError::Config("timeout_secs must be greater than zero".to_string()));
        }
        if self.nba_stats.base_url.is_empty() || self.api_sports.base_url.is_empty() {
            return Err(FetchError::Config("base_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get the api-sports key from the environment
    pub fn api_sports_key(&self) -> Result<String> {
        std::env::var(&self.api_sports.api_key_env).map_err(|_| {
            FetchError::Config(format!(
                "api-sports key not found in environment variable {}",
                self.api_sports.api_key_env
            ))
        })
    }
}

impl NbaStatsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ApiSportsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CacheConfig {
    pub fn roster_ttl(&self) -> Duration {
        Duration::from_secs(self.roster_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.nba_stats.league_id, "00");
        assert_eq!(config.nba_stats.season, "2024-25");
        assert_eq!(config.nba_stats.timeout(), Duration::from_secs(10));
        assert_eq!(config.api_sports.league, "standard");
        assert_eq!(config.cache.roster_ttl(), Duration::ZERO);
    }

    #[test]
    fn test_load_overrides_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[nba_stats]
season = "2023-24"
timeout_secs = 5

[cache]
roster_ttl_secs = 600
"#
        )
        .unwrap();

        let config = DashboardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.nba_stats.season, "2023-24");
        assert_eq!(config.nba_stats.timeout_secs, 5);
        assert_eq!(config.cache.roster_ttl_secs, 600);
        // Untouched keys keep their defaults
        assert_eq!(config.nba_stats.league_id, "00");
        assert_eq!(config.api_sports.base_url, "https://v2.nba.api-sports.io");
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api_sports]\ntimeout_secs = 0").unwrap();

        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = Path::new("/nonexistent/dashboard.toml");
        let err = DashboardConfig::load(Some(path)).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[test]
    fn test_environment_overrides_keep_string_values() {
        let prefix = "DASHBOARD_ENV_TEST";
        std::env::set_var("DASHBOARD_ENV_TEST__NBA_STATS__LEAGUE_ID", "00");
        std::env::set_var("DASHBOARD_ENV_TEST__NBA_STATS__SEASON", "2023-24");
        std::env::set_var("DASHBOARD_ENV_TEST__API_SPORTS__SEASON", "2023");
        std::env::set_var("DASHBOARD_ENV_TEST__NBA_STATS__TIMEOUT_SECS", "5");
        std::env::set_var("DASHBOARD_ENV_TEST__CACHE__ROSTER_TTL_SECS", "300");

        let config = DashboardConfig::load_with_prefix(None, prefix).unwrap();
        assert_eq!(config.nba_stats.league_id, "00");
        assert_eq!(config.nba_stats.season, "2023-24");
        assert_eq!(config.api_sports.season, "2023");
        assert_eq!(config.nba_stats.timeout(), Duration::from_secs(5));
        assert_eq!(config.cache.roster_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_environment_overrides_file() {
        let prefix = "DASHBOARD_FILE_ENV_TEST";
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[nba_stats]\nseason = \"2022-23\"\nreferer = \"https://example.test/\"")
            .unwrap();
        std::env::set_var("DASHBOARD_FILE_ENV_TEST__NBA_STATS__SEASON", "2021-22");

        let config = DashboardConfig::load_with_prefix(Some(file.path()), prefix).unwrap();
        assert_eq!(config.nba_stats.season, "2021-22");
        assert_eq!(config.nba_stats.referer, "https://example.test/");
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = DashboardConfig::default();
        config.api_sports.api_key_env = "NIGHTLY_DASHBOARD_TEST_UNSET_KEY".to_string();
        let err = config.api_sports_key().unwrap_err();
        assert!(err.to_string().contains("NIGHTLY_DASHBOARD_TEST_UNSET_KEY"));
    }
}
