mod fetch;
mod init_db;
mod report;
mod seed;
mod store;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "trendboard-cli")]
#[command(about = "Trendboard command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect trends from all sources, persist them, and generate a daily
    /// report
    Fetch {
        /// Region code for Google Trends
        #[arg(long, default_value = "US")]
        geo: String,
        /// Subreddit to pull daily top posts from
        #[arg(long, default_value = "technology")]
        subreddit: String,
    },
    /// Persist the built-in fixture data set (first-run convenience)
    Seed,
    /// Connect to the database and create the schema
    InitDb,
    /// Analyze the stored trends and persist a monthly report
    Report {
        /// Month label for the report, e.g. "July 2025"
        #[arg(long)]
        month: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = trendboard_core::load_app_config()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch { geo, subreddit } => fetch::run(&config, &geo, &subreddit).await,
        Commands::Seed => seed::run(&config).await,
        Commands::InitDb => init_db::run().await,
        Commands::Report { month } => report::run(&config, &month).await,
    }
}
