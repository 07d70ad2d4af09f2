use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{self, FetchError};

/// stats.nba.com response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One table in a stats.nba.com response: column names plus positional rows
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,

    pub headers: Vec<String>,

    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// api-sports response envelope.
///
/// Key and quota problems come back as 200 with a non-empty `errors` field,
/// sent as an object keyed by field or as a list of messages.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub errors: Value,

    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

impl<T> ApiResponse<T> {
    /// Provider-reported errors joined into one message, if there are any
    pub fn error_message(&self) -> Option<String> {
        let messages: Vec<String> = match &self.errors {
            Value::Object(map) => map
                .iter()
                .map(|(field, message)| format!("{field}: {}", error_text(message)))
                .collect(),
            Value::Array(items) => items.iter().map(error_text).collect(),
            Value::String(message) if !message.is_empty() => vec![message.clone()],
            _ => Vec::new(),
        };

        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }

    /// Unwrap the payload, failing when the provider reported errors
    pub fn into_response(self, endpoint: &str) -> error::Result<Vec<T>> {
        match self.error_message() {
            Some(message) => Err(FetchError::Provider {
                endpoint: endpoint.to_string(),
                message,
            }),
            None => Ok(self.response),
        }
    }
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Conference filter for standings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "east",
            Conference::West => "west",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRef {
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
}

/// Team entry from `/standings`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamStanding {
    pub team: TeamRef,

    pub conference: ConferenceRank,

    pub win: WinRecord,

    /// Length of the current streak
    #[serde(default, deserialize_with = "null_as_default")]
    pub streak: u32,

    /// True when the current streak is a winning one
    #[serde(rename = "winStreak", default, deserialize_with = "null_as_default")]
    pub win_streak: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConferenceRank {
    pub name: String,
    pub rank: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WinRecord {
    /// Win percentage as the provider formats it (e.g., ".683")
    pub percentage: String,
}

/// Game entry from `/games`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    pub id: i64,
    pub teams: GameTeams,
    pub scores: GameScores,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameTeams {
    pub home: TeamRef,
    pub visitors: TeamRef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameScores {
    pub home: TeamScore,
    pub visitors: TeamScore,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamScore {
    /// Missing until the game has started
    pub points: Option<i32>,
}

/// Box score line from `/players/statistics`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerGameLine {
    pub player: PlayerName,

    pub team: TeamName,

    #[serde(default, deserialize_with = "null_as_default")]
    pub points: i32,

    #[serde(rename = "totReb", default, deserialize_with = "null_as_default")]
    pub total_rebounds: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub assists: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub steals: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub turnovers: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub firstname: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lastname: String,
}

impl PlayerName {
    /// "First Last", the form the roster directory resolves
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamName {
    pub name: String,
}

/// The feed sends `null` for stats a player never recorded
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
