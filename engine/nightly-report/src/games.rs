use nba_fetcher::Game;
use serde::Serialize;

/// A game flattened into one dashboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_logo: String,
    pub away_logo: String,
}

impl GameSummary {
    pub fn from_game(game: &Game) -> Self {
        Self {
            id: game.id,
            home_team: game.teams.home.name.clone(),
            away_team: game.teams.visitors.name.clone(),
            home_score: game.scores.home.points,
            away_score: game.scores.visitors.points,
            home_logo: game.teams.home.logo.clone(),
            away_logo: game.teams.visitors.logo.clone(),
        }
    }

    /// Absolute score margin, once both teams have a score
    pub fn difference(&self) -> Option<i32> {
        Some((self.home_score? - self.away_score?).abs())
    }

    /// Name of the team with more points; ties and unscored games have no winner
    pub fn winner(&self) -> Option<&str> {
        let (home, away) = (self.home_score?, self.away_score?);
        if home > away {
            Some(self.home_team.as_str())
        } else if away > home {
            Some(self.away_team.as_str())
        } else {
            None
        }
    }

    pub fn is_blowout(&self) -> bool {
        self.difference().is_some_and(|d| d >= crate::BLOWOUT_MARGIN)
    }

    pub fn is_tight(&self) -> bool {
        self.difference().is_some_and(|d| d <= crate::TIGHT_MARGIN)
    }
}
