//! FitLab CLI: one-shot catalog search and config inspection.
//!
//! Commands:
//! - `search`: query the exercise catalog and print cards, JSON, or one detail
//! - `config`: show which config file is used and whether a key is set

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fitlab_core::config::API_KEY_ENV;
use fitlab_core::{Exercise, ExerciseCatalog, ExerciseQuery, FitlabConfig, RapidApiCatalog, ResultSet};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitlab", about = "FitLab CLI: exercise catalog search")]
struct Cli {
    /// Config file. Defaults to $FITLAB_CONFIG or the platform config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the exercise catalog. Empty filters are left out of the request.
    Search {
        /// Exercise name (or part of it).
        #[arg(long, default_value = "")]
        name: String,

        /// Target muscle filter.
        #[arg(long, default_value = "")]
        muscle: String,

        /// Exercise type filter.
        #[arg(long = "type", default_value = "")]
        exercise_type: String,

        /// Print the raw records as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Print full detail for the result with this id.
        #[arg(long)]
        detail: Option<String>,
    },
    /// Show the resolved configuration.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = cli.config.clone().unwrap_or_else(FitlabConfig::default_path);
    let mut config = FitlabConfig::load(&path)?;
    config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());

    match cli.command {
        Commands::Search {
            name,
            muscle,
            exercise_type,
            json,
            detail,
        } => {
            let query = ExerciseQuery::new(name, muscle, exercise_type);
            cmd_search(&config, &query, json, detail.as_deref())
        }
        Commands::Config => {
            cmd_config(&config, &path);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_search(
    config: &FitlabConfig,
    query: &ExerciseQuery,
    json: bool,
    detail: Option<&str>,
) -> Result<()> {
    let catalog = RapidApiCatalog::new(&config.catalog)?;
    eprintln!("Loading exercises ({})...", query.describe());

    let records = match catalog.search(query) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "catalog search failed");
            bail!("Failed to load exercises: {e}");
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No exercises found matching your criteria.");
        return Ok(());
    }

    let set = ResultSet::new(records);
    match detail {
        Some(id) => {
            let exercise = set
                .find(id)
                .with_context(|| format!("no exercise with id {id} in these results"))?;
            print_detail(exercise);
        }
        None => {
            for exercise in set.records() {
                print_card(exercise);
            }
            println!("{} exercises", set.len());
        }
    }
    Ok(())
}

fn print_card(ex: &Exercise) {
    println!("── {} [{}]", ex.display_name(), ex.id);
    println!("   Target Muscle: {}", ex.display_target());
    println!("   Equipment:     {}", ex.display_equipment());
    println!("   Image:         {}", ex.gif_url);
    println!();
}

fn print_detail(ex: &Exercise) {
    println!("{}", ex.display_name());
    println!("  Body Part:     {}", ex.display_body_part());
    println!("  Target Muscle: {}", ex.display_target());
    println!("  Equipment:     {}", ex.display_equipment());
    println!("  Instructions:");
    for step in ex.numbered_instructions() {
        println!("    {step}");
    }
    println!("  Image:         {}", ex.gif_url);
}

fn cmd_config(config: &FitlabConfig, path: &std::path::Path) {
    let exists = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Config file: {}{exists}", path.display());
    println!("Endpoint:    {}{}", config.catalog.base_url, config.catalog.path);
    println!("Host header: {}", config.catalog.host);
    println!(
        "API key:     {}",
        if config.catalog.api_key.is_empty() {
            format!("not set (use {API_KEY_ENV})")
        } else {
            "set".to_string()
        }
    );
    match config.catalog.timeout_secs {
        Some(s) => println!("Timeout:     {s}s"),
        None => println!("Timeout:     none"),
    }
    println!("Muscles:     {}", config.filters.muscles.join(", "));
    println!("Types:       {}", config.filters.types.join(", "));
}
