//! Command line driver for the match rating engine
//!
//! Rates single pairings, checks match drafts stored as JSON, and submits
//! them against a JSON snapshot of current ratings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use match_rating::config::AppConfig;
use match_rating::draft::{MatchDraft, MatchSubmitter};
use match_rating::rating::{margin_multiplier, EloRatingCalculator, RatingCalculator};
use match_rating::types::{CompetitionLevel, MatchOutcome, PlayerId, SetScore};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Match Rating - Elo ladder for amateur racket sport matches
#[derive(Parser)]
#[command(
    name = "match-rating",
    version,
    about = "Rate matches and validate match drafts",
    long_about = "Computes level-scaled Elo rating changes with a set-margin multiplier, \
                 and checks whether a composed match draft is complete enough to submit."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rate one side of a pairing
    Rate {
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        opponent: f64,
        /// win, draw or loss
        #[arg(long)]
        outcome: MatchOutcome,
        #[arg(long, default_value = "friendly")]
        level: CompetitionLevel,
        /// Comma separated set scores, e.g. 6-4,3-6,10-8*
        #[arg(long, value_delimiter = ',')]
        sets: Vec<SetScore>,
    },
    /// Report why a draft cannot be submitted
    Check {
        #[arg(long, value_name = "FILE")]
        draft: PathBuf,
    },
    /// Rate a draft against current ratings
    Submit {
        #[arg(long, value_name = "FILE")]
        draft: PathBuf,
        /// JSON object mapping player id to rating
        #[arg(long, value_name = "FILE")]
        ratings: Option<PathBuf>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    match_rating::config::validate_config(&config)?;
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }
    debug!(service = %config.service.name, rounding = ?config.rating.rounding, "Configuration loaded");

    let calculator = EloRatingCalculator::new(config.rating.clone())?;

    match args.command {
        Command::Rate {
            rating,
            opponent,
            outcome,
            level,
            sets,
        } => {
            let multiplier = margin_multiplier(&sets);
            let update = calculator.rate_pair(rating, opponent, outcome, level, multiplier);
            println!("{}", serde_json::to_string_pretty(&update)?);
        }
        Command::Check { draft } => {
            let draft: MatchDraft = read_json(&draft)?;
            let issues = draft.issues();
            if issues.is_empty() {
                println!("Draft is ready to submit");
            } else {
                for issue in &issues {
                    println!("incomplete match: {}", issue);
                }
                std::process::exit(2);
            }
        }
        Command::Submit { draft, ratings } => {
            let mut draft: MatchDraft = read_json(&draft)?;
            let ratings: HashMap<PlayerId, f64> = match ratings {
                Some(path) => read_json(&path)?,
                None => HashMap::new(),
            };

            let submitter = MatchSubmitter::new(calculator);
            let submitted = submitter.submit(&mut draft, &ratings)?;
            info!(match_id = %submitted.match_id, "Rated {} players", submitted.changes.len());
            println!("{}", serde_json::to_string_pretty(&submitted)?);
        }
    }

    Ok(())
}
