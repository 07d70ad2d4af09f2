use std::cmp::Ordering;

use tracing::debug;

use crate::games::GameSummary;
use crate::players::{PlayerLine, StatCategory};

/// Everything the dashboard shows about one night of games
#[derive(Debug, Clone, Default)]
pub struct NightReport {
    games: Vec<GameSummary>,
    lines: Vec<PlayerLine>,
}

impl NightReport {
    /// Build a report; player lines are ranked by fantasy rating, best first
    pub fn new(games: Vec<GameSummary>, mut lines: Vec<PlayerLine>) -> Self {
        lines.sort_by(|a, b| {
            b.fantasy_rating
                .partial_cmp(&a.fantasy_rating)
                .unwrap_or(Ordering::Equal)
        });
        debug!("Night report with {} games and {} player lines", games.len(), lines.len());
        Self { games, lines }
    }

    pub fn has_games(&self) -> bool {
        !self.games.is_empty()
    }

    pub fn games(&self) -> &[GameSummary] {
        &self.games
    }

    /// Player lines, best fantasy rating first
    pub fn lines(&self) -> &[PlayerLine] {
        &self.lines
    }

    /// Distinct winning teams in game order
    pub fn winners(&self) -> Vec<&str> {
        let mut winners: Vec<&str> = Vec::new();
        for winner in self.games.iter().filter_map(GameSummary::winner) {
            if !winners.contains(&winner) {
                winners.push(winner);
            }
        }
        winners
    }

    /// Best fantasy rating among players whose team won
    pub fn man_of_the_night(&self) -> Option<&PlayerLine> {
        let winners = self.winners();
        self.lines.iter().find(|line| winners.contains(&line.team.as_str()))
    }

    /// Top `limit` players in a category
    pub fn leaders(&self, category: StatCategory, limit: usize) -> Vec<&PlayerLine> {
        let mut ranked: Vec<&PlayerLine> = self.lines.iter().collect();
        ranked.sort_by(|a, b| b.stat(category).cmp(&a.stat(category)));
        ranked.truncate(limit);
        ranked
    }

    /// Lowest non-zero producers in a category
    pub fn no_shows(&self, category: StatCategory, limit: usize) -> Vec<&PlayerLine> {
        let mut ranked: Vec<&PlayerLine> = self
            .lines
            .iter()
            .filter(|line| line.stat(category) > 0)
            .collect();
        ranked.sort_by_key(|line| line.stat(category));
        ranked.truncate(limit);
        ranked
    }

    pub fn blowouts(&self) -> Vec<&GameSummary> {
        self.games.iter().filter(|g| g.is_blowout()).collect()
    }

    pub fn tight_games(&self) -> Vec<&GameSummary> {
        self.games.iter().filter(|g| g.is_tight()).collect()
    }
}
