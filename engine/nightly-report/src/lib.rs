//! Nightly Report
//!
//! Pure table shaping for the nightly dashboard: conference standings,
//! hot and cold streaks, game summaries, and box-score leaderboards ranked by
//! a weighted fantasy rating. Nothing here performs I/O.

pub mod games;
pub mod night;
pub mod players;
pub mod standings;

pub use games::GameSummary;
pub use night::NightReport;
pub use players::{fantasy_rating, PlayerLine, StatCategory};
pub use standings::{conference_table, streaks, StandingRow, StreakRow};

/// Minimum margin for a game to count as a blowout
pub const BLOWOUT_MARGIN: i32 = 20;

/// Maximum margin for a game to count as tight
pub const TIGHT_MARGIN: i32 = 5;
