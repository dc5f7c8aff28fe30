mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use oddslab::config::Settings;
use oddslab::models::{OddsSelector, Venue};

#[derive(Parser)]
#[command(name = "oddslab")]
#[command(about = "Betting-market analytics over historical football results")]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// CSV dataset (defaults to ODDSLAB_DATA_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Built-in column layout: "coded" or "descriptive" (auto-detected if omitted)
    #[arg(short, long, global = true)]
    layout: Option<String>,

    /// JSON column mapping for a custom layout
    #[arg(short, long, global = true)]
    mapping: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VenueArg {
    Home,
    Away,
}

#[derive(Clone, Copy, ValueEnum)]
enum SelectorArg {
    TeamWin,
    Draw,
    OpponentWin,
}

#[derive(Subcommand)]
enum Commands {
    /// List the teams in the dataset
    Teams,
    /// ROI, distributions and goal timing for one team
    Analyze {
        #[arg(short, long)]
        team: String,
        #[arg(short, long, value_enum, default_value = "home")]
        venue: VenueArg,
        #[arg(short, long, value_enum, default_value = "team-win")]
        odds: SelectorArg,
        /// Odds band names to include; all bands when omitted
        #[arg(short, long = "band")]
        bands: Vec<String>,
        #[arg(long)]
        top_k: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Distributions and goal timing for one home/away pairing
    H2h {
        #[arg(long)]
        home: String,
        #[arg(long)]
        away: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the odds band catalog
    Bands,
    /// Print the built-in column layouts as JSON
    Layouts,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let source = cli::Source {
        file: cli.source.file,
        layout: cli.source.layout,
        mapping: cli.source.mapping,
    };

    match cli.command {
        Commands::Teams => cli::list_teams(&source, &settings)?,
        Commands::Analyze { team, venue, odds, bands, top_k, json } => {
            let venue = match venue {
                VenueArg::Home => Venue::Home,
                VenueArg::Away => Venue::Away,
            };
            let selector = match odds {
                SelectorArg::TeamWin => OddsSelector::TeamWin,
                SelectorArg::Draw => OddsSelector::Draw,
                SelectorArg::OpponentWin => OddsSelector::OpponentWin,
            };
            tracing::info!("Analyzing {} ({:?}, {:?} odds)", team, venue, selector);
            cli::analyze_team(
                &source,
                &settings,
                cli::AnalyzeArgs { team, venue, selector, bands, top_k, json },
            )?;
        }
        Commands::H2h { home, away, json } => {
            tracing::info!("Head-to-head: {} vs {}", home, away);
            cli::head_to_head(&source, &settings, &home, &away, json)?;
        }
        Commands::Bands => cli::list_bands(),
        Commands::Layouts => cli::show_layouts()?,
    }

    Ok(())
}
