use anyhow::{Context, Result};
use clap::Parser;
use nba_fetcher::{CachedRosterDirectory, DashboardConfig, NbaStatsFetcher};
use player_registry::IdentityResolver;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "resolve-headshot")]
#[command(about = "Resolve one player name to an NBA person ID and headshot URL")]
struct Args {
    /// Player name, e.g. "LeBron James"
    name: String,

    /// Season label; defaults to the configured season
    #[arg(short, long)]
    season: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = DashboardConfig::load(None).context("Failed to load configuration")?;
    let season = args.season.unwrap_or_else(|| config.nba_stats.season.clone());

    let fetcher = NbaStatsFetcher::new(config.nba_stats.clone())?;
    let directory = CachedRosterDirectory::new(fetcher, config.cache.roster_ttl());
    let resolver = IdentityResolver::new(directory);

    info!("Resolving '{}' on the {} roster", args.name, season);
    let resolution = resolver
        .resolve(&args.name, &season)
        .await
        .with_context(|| format!("Failed to resolve '{}'", args.name))?;

    println!("{}: {}", args.name, resolution);
    println!("{}", resolution.headshot_url());
    Ok(())
}
