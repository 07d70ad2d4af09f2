use nba_fetcher::PlayerGameLine;
use serde::Serialize;
use std::fmt;

/// Box-score category a leaderboard can rank by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
}

impl StatCategory {
    pub const ALL: [StatCategory; 5] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Steals,
        StatCategory::Blocks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Points => "Points",
            StatCategory::Rebounds => "Rebounds",
            StatCategory::Assists => "Assists",
            StatCategory::Steals => "Steals",
            StatCategory::Blocks => "Blocks",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighted box-score score used to rank performances
pub fn fantasy_rating(
    points: i32,
    rebounds: i32,
    assists: i32,
    steals: i32,
    blocks: i32,
    turnovers: i32,
) -> f64 {
    f64::from(points)
        + 1.2 * f64::from(rebounds)
        + 1.5 * f64::from(assists)
        + 3.0 * f64::from(steals + blocks)
        - 1.5 * f64::from(turnovers)
}

/// One player's night
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLine {
    pub first_name: String,
    pub last_name: String,
    pub team: String,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
    pub fantasy_rating: f64,
}

impl PlayerLine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: &str,
        last_name: &str,
        team: &str,
        points: i32,
        rebounds: i32,
        assists: i32,
        steals: i32,
        blocks: i32,
        turnovers: i32,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            team: team.to_string(),
            points,
            rebounds,
            assists,
            steals,
            blocks,
            turnovers,
            fantasy_rating: fantasy_rating(points, rebounds, assists, steals, blocks, turnovers),
        }
    }

    pub fn from_game_line(line: &PlayerGameLine) -> Self {
        Self::new(
            &line.player.firstname,
            &line.player.lastname,
            &line.team.name,
            line.points,
            line.total_rebounds,
            line.assists,
            line.steals,
            line.blocks,
            line.turnovers,
        )
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn stat(&self, category: StatCategory) -> i32 {
        match category {
            StatCategory::Points => self.points,
            StatCategory::Rebounds => self.rebounds,
            StatCategory::Assists => self.assists,
            StatCategory::Steals => self.steals,
            StatCategory::Blocks => self.blocks,
        }
    }

    /// "31 pts - 9 reb - 11 ast"
    pub fn headline(&self) -> String {
        format!("{} pts - {} reb - {} ast", self.points, self.rebounds, self.assists)
    }
}
