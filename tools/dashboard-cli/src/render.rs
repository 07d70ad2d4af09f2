use colored::*;

use nba_fetcher::Conference;
use nightly_report::{GameSummary, PlayerLine, StandingRow, StatCategory, StreakRow};

fn header(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(title.chars().count().max(20)));
}

fn score(points: Option<i32>) -> String {
    points.map_or_else(|| "-".to_string(), |p| p.to_string())
}

pub fn standings(conference: Conference, rows: &[StandingRow]) {
    let title = match conference {
        Conference::East => "Eastern Conference Standings",
        Conference::West => "Western Conference Standings",
    };
    header(title);
    println!("{:>4}  {:<28} {:>6}", "Seed", "Team", "Pct");
    for row in rows {
        println!("{:>4}  {:<28} {:>6}", row.seed, row.team, row.win_percentage);
    }
}

pub fn streaks(title: &str, rows: &[StreakRow]) {
    header(title);
    println!("{:<28} {:>6}", "Team", "Streak");
    for row in rows {
        println!("{:<28} {:>6}", row.team, row.streak);
    }
}

pub fn man_of_the_night(mvp: &PlayerLine, headshot_url: &str) {
    header("⭐ Man of the Night");
    println!("{} ({})", mvp.full_name().green().bold(), mvp.team);
    println!("{}", mvp.headline());
    println!("Fantasy rating: {:.1}", mvp.fantasy_rating);
    println!("{headshot_url}");
}

pub fn games(title: &str, games: &[&GameSummary]) {
    header(title);
    if games.is_empty() {
        println!("{}", "(none)".dimmed());
        return;
    }

    println!("{:<26} {:>5} {:>5}  {:<26} {:>5}", "Home", "", "", "Away", "Diff");
    for game in games {
        let diff = game.difference().map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "{:<26} {:>5} {:>5}  {:<26} {:>5}",
            game.home_team,
            score(game.home_score),
            score(game.away_score),
            game.away_team,
            diff
        );
    }
}

pub fn leaderboard(title: &str, category: StatCategory, lines: &[&PlayerLine]) {
    header(title);
    if lines.is_empty() {
        println!("{}", "(none)".dimmed());
        return;
    }

    println!("{:>4}  {:<26} {:<26} {:>8}", "Rank", "Player", "Team", category.label());
    for (rank, line) in lines.iter().enumerate() {
        println!(
            "{:>4}  {:<26} {:<26} {:>8}",
            rank + 1,
            line.full_name(),
            line.team,
            line.stat(category)
        );
    }
}
