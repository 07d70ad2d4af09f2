//! Nightly NBA Dashboard
//!
//! Terminal rendering of the nightly dashboard:
//! - headshot: resolve player names to headshot URLs
//! - standings: conference standings
//! - night: man of the night, games, leaders, blowouts and tight games
//! - streaks: hottest and coldest teams

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use futures::future::{join_all, try_join_all};
use tracing::{info, warn, Level};

use nba_fetcher::{
    ApiSportsClient, CachedRosterDirectory, Conference, DashboardConfig, NbaStatsFetcher,
};
use nightly_report::{
    conference_table, streaks, GameSummary, NightReport, PlayerLine, StatCategory,
};
use player_registry::{IdentityResolver, FALLBACK_HEADSHOT_URL};

#[derive(Parser)]
#[command(name = "nba-dashboard")]
#[command(about = "Nightly NBA dashboard - standings, box scores, streaks and player headshots")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve player names to headshot URLs
    Headshot {
        /// Player names, e.g. "LeBron James"
        #[arg(required = true)]
        names: Vec<String>,

        /// Season label; defaults to the configured season
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Conference standings
    Standings {
        #[arg(long, value_enum, default_value = "east")]
        conference: ConferenceArg,
    },

    /// Summary of one night of games
    Night {
        /// Game date (YYYY-MM-DD, UTC); defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Leaderboard category
        #[arg(long, value_enum, default_value = "points")]
        category: CategoryArg,

        /// Rows per leaderboard
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Teams on the longest winning and losing streaks
    Streaks {
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConferenceArg {
    East,
    West,
}

impl From<ConferenceArg> for Conference {
    fn from(arg: ConferenceArg) -> Self {
        match arg {
            ConferenceArg::East => Conference::East,
            ConferenceArg::West => Conference::West,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
}

impl From<CategoryArg> for StatCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Points => StatCategory::Points,
            CategoryArg::Rebounds => StatCategory::Rebounds,
            CategoryArg::Assists => StatCategory::Assists,
            CategoryArg::Steals => StatCategory::Steals,
            CategoryArg::Blocks => StatCategory::Blocks,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config =
        DashboardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Headshot { names, season } => {
            let season = season.unwrap_or_else(|| config.nba_stats.season.clone());
            run_headshots(&config, &names, &season).await
        }
        Commands::Standings { conference } => run_standings(&config, conference.into()).await,
        Commands::Night {
            date,
            category,
            limit,
        } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            run_night(&config, date, category.into(), limit).await
        }
        Commands::Streaks { limit } => run_streaks(&config, limit).await,
    }
}

type Resolver = IdentityResolver<CachedRosterDirectory<NbaStatsFetcher>>;

fn build_resolver(config: &DashboardConfig) -> Result<Resolver> {
    let fetcher =
        NbaStatsFetcher::new(config.nba_stats.clone()).context("Failed to create stats client")?;
    let directory = CachedRosterDirectory::new(fetcher, config.cache.roster_ttl());
    Ok(IdentityResolver::new(directory))
}

async fn run_headshots(config: &DashboardConfig, names: &[String], season: &str) -> Result<()> {
    let resolver = build_resolver(config)?;

    // Resolutions are independent; run them side by side
    let results = join_all(names.iter().map(|name| resolver.resolve(name, season))).await;

    println!("{}", format!("🏀 Headshots ({season})").cyan().bold());
    let mut failures = 0;
    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(resolution) if resolution.is_found() => {
                println!("  {} {} ({})", "✅".green(), name.bold(), resolution);
                println!("     {}", resolution.headshot_url());
            }
            Ok(resolution) => {
                println!("  {} {} ({})", "❔".yellow(), name.bold(), resolution);
                println!("     {}", resolution.headshot_url());
            }
            Err(e) => {
                failures += 1;
                println!("  {} {}: {}", "❌".red(), name.bold(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} lookups failed", names.len());
    }
    Ok(())
}

async fn run_standings(config: &DashboardConfig, conference: Conference) -> Result<()> {
    let client = ApiSportsClient::from_config(config)?;
    let standings = client
        .standings(Some(conference))
        .await
        .context("Failed to fetch standings")?;

    render::standings(conference, &conference_table(&standings));
    Ok(())
}

async fn run_streaks(config: &DashboardConfig, limit: usize) -> Result<()> {
    let client = ApiSportsClient::from_config(config)?;
    let standings = client
        .standings(None)
        .await
        .context("Failed to fetch standings")?;

    let (hot, cold) = streaks(&standings);
    render::streaks("🔥 Hot Streak", &hot[..limit.min(hot.len())]);
    render::streaks("🧊 Ice Cold", &cold[..limit.min(cold.len())]);
    Ok(())
}

async fn run_night(
    config: &DashboardConfig,
    date: NaiveDate,
    category: StatCategory,
    limit: usize,
) -> Result<()> {
    let client = ApiSportsClient::from_config(config)?;
    let games = client
        .games_on(date)
        .await
        .with_context(|| format!("Failed to fetch games for {date}"))?;

    if games.is_empty() {
        println!("{}", "No games last night".yellow().bold());
        return Ok(());
    }

    let box_scores = try_join_all(games.iter().map(|game| client.player_statistics(game.id)))
        .await
        .context("Failed to fetch box scores")?;

    let summaries: Vec<GameSummary> = games.iter().map(GameSummary::from_game).collect();
    let lines: Vec<PlayerLine> = box_scores
        .iter()
        .flatten()
        .map(PlayerLine::from_game_line)
        .collect();
    let report = NightReport::new(summaries, lines);
    info!("Built report for {} with {} games", date, report.games().len());

    if let Some(mvp) = report.man_of_the_night() {
        let headshot = man_of_the_night_headshot(config, mvp).await;
        render::man_of_the_night(mvp, &headshot);
    }

    render::games("All Tonight Games", &report.games().iter().collect::<Vec<_>>());
    render::leaderboard(
        &format!("League Leaders - {category}"),
        category,
        &report.leaders(category, limit),
    );
    render::leaderboard("Didn't show up", category, &report.no_shows(category, limit));
    render::games("Blowouts", &report.blowouts());
    render::games("Tight Games", &report.tight_games());
    Ok(())
}

/// The dashboard still renders when the roster lookup fails; the placeholder stands in
async fn man_of_the_night_headshot(config: &DashboardConfig, mvp: &PlayerLine) -> String {
    let name = mvp.full_name();
    let lookup = match build_resolver(config) {
        Ok(resolver) => resolver
            .fetch_headshot_url(&name, &config.nba_stats.season)
            .await
            .map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };

    lookup.unwrap_or_else(|e| {
        warn!("Headshot lookup for {} failed: {:#}", name, e);
        FALLBACK_HEADSHOT_URL.to_string()
    })
}
