use nba_fetcher::TeamStanding;
use serde::Serialize;

/// One row of a conference standings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub seed: u32,
    pub team: String,
    pub win_percentage: String,
    pub logo: String,
}

/// A team on a winning or losing streak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakRow {
    pub team: String,
    pub logo: String,
    pub streak: u32,
}

/// Standings ordered by conference seed
pub fn conference_table(standings: &[TeamStanding]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = standings
        .iter()
        .map(|s| StandingRow {
            seed: s.conference.rank,
            team: s.team.name.clone(),
            win_percentage: s.win.percentage.clone(),
            logo: s.team.logo.clone(),
        })
        .collect();

    rows.sort_by_key(|row| row.seed);
    rows
}

/// Split teams into (hot, cold) streaks, longest first
pub fn streaks(standings: &[TeamStanding]) -> (Vec<StreakRow>, Vec<StreakRow>) {
    let mut hot = Vec::new();
    let mut cold = Vec::new();

    for s in standings {
        let row = StreakRow {
            team: s.team.name.clone(),
            logo: s.team.logo.clone(),
            streak: s.streak,
        };
        if s.win_streak {
            hot.push(row);
        } else {
            cold.push(row);
        }
    }

    // Stable sort keeps provider order among equal streaks
    hot.sort_by(|a, b| b.streak.cmp(&a.streak));
    cold.sort_by(|a, b| b.streak.cmp(&a.streak));
    (hot, cold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_fetcher::models::{ConferenceRank, TeamRef, WinRecord};

    fn standing(name: &str, rank: u32, pct: &str, streak: u32, win_streak: bool) -> TeamStanding {
        TeamStanding {
            team: TeamRef {
                name: name.to_string(),
                logo: format!("https://example.test/{rank}.png"),
            },
            conference: ConferenceRank {
                name: "west".to_string(),
                rank,
            },
            win: WinRecord {
                percentage: pct.to_string(),
            },
            streak,
            win_streak,
        }
    }

    #[test]
    fn test_conference_table_sorted_by_seed() {
        let standings = vec![
            standing("Denver Nuggets", 4, ".610", 2, true),
            standing("Oklahoma City Thunder", 1, ".829", 4, true),
            standing("Houston Rockets", 2, ".634", 1, false),
        ];

        let table = conference_table(&standings);
        let teams: Vec<&str> = table.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Oklahoma City Thunder", "Houston Rockets", "Denver Nuggets"]);
        assert_eq!(table[0].seed, 1);
        assert_eq!(table[0].win_percentage, ".829");
    }

    #[test]
    fn test_streaks_split_and_sorted() {
        let standings = vec![
            standing("Denver Nuggets", 4, ".610", 2, true),
            standing("Oklahoma City Thunder", 1, ".829", 4, true),
            standing("Houston Rockets", 2, ".634", 1, false),
            standing("Utah Jazz", 15, ".207", 6, false),
        ];

        let (hot, cold) = streaks(&standings);
        assert_eq!(hot.iter().map(|r| r.streak).collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(hot[0].team, "Oklahoma City Thunder");
        let cold_teams: Vec<&str> = cold.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(cold_teams, vec!["Utah Jazz", "Houston Rockets"]);
    }

    #[test]
    fn test_empty_standings() {
        assert!(conference_table(&[]).is_empty());
        let (hot, cold) = streaks(&[]);
        assert!(hot.is_empty() && cold.is_empty());
    }
}
