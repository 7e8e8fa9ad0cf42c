//! Condensa - indoor humidity and condensation check
//! Command-line interface for the psychrometric core and the weather lookup

mod config;
mod output;
mod state;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use condensa_core::assess;
use condensa_weather::{OpenMeteoClient, WeatherLookup};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::CondensaConfig;
use output::{CalcReport, render_assessment, render_observation};
use state::InputState;

#[derive(Parser)]
#[command(name = "condensa")]
#[command(author = "Silvano Neto")]
#[command(version = "2026.1.16")]
#[command(about = "Will you get mould or condensation at home?", long_about = None)]
struct Cli {
    /// Configuration file (default: ./condensa.toml when present)
    #[arg(short, long, global = true, value_name = "FILE", env = "CONDENSA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Outdoor/indoor inputs shared by `calc` and `diagram`
#[derive(Args, Debug)]
struct InputArgs {
    /// Outdoor temperature (°C)
    #[arg(long = "outdoor-temp", short = 't', allow_negative_numbers = true)]
    outdoor_temperature: Option<f64>,

    /// Outdoor relative humidity (%)
    #[arg(long = "outdoor-rh", short = 'r')]
    outdoor_humidity: Option<f64>,

    /// Target indoor temperature (°C)
    #[arg(long = "indoor-temp", short = 'i', allow_negative_numbers = true)]
    indoor_temperature: Option<f64>,

    /// Fetch outdoor conditions for this place instead of typing them
    #[arg(long, short = 'p', value_name = "PLACE")]
    place: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute indoor humidity, dew point and advisories
    Calc {
        #[command(flatten)]
        input: InputArgs,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the psychrometric chart geometry as JSON
    Diagram {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Show the current outdoor conditions for a place
    Lookup {
        /// Place name, e.g. "Milan"
        #[arg(value_name = "PLACE")]
        place: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "condensa=warn,condensa_weather=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CondensaConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Calc { input, json } => calc_command(&config, &input, json).await,
        Commands::Diagram { input, output } => {
            diagram_command(&config, &input, output.as_deref()).await
        }
        Commands::Lookup { place, json } => lookup_command(&config, &place, json).await,
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

// ============================================================================
// Input resolution
// ============================================================================

/// Manual values first, then one lookup attempt if a place was given
///
/// A failed lookup is reported and the manual values stay in effect.
async fn resolve_inputs(config: &CondensaConfig, args: &InputArgs) -> Result<InputState> {
    let mut state = InputState::manual(
        args.outdoor_temperature,
        args.outdoor_humidity,
        args.indoor_temperature,
        &config.defaults,
    )
    .context("invalid outdoor reading")?;

    if let Some(place) = &args.place {
        let client = OpenMeteoClient::with_config(config.weather.clone())?;
        let outcome = client.lookup(place).await;

        match state.apply_lookup(outcome) {
            Ok(()) => info!(place = %place, outdoor = ?state.outdoor(), "using fetched outdoor reading"),
            Err(e) => eprintln!(
                "{} lookup for '{}' failed: {}; using manual values",
                "warning:".yellow().bold(),
                place,
                e
            ),
        }
    }

    Ok(state)
}

// ============================================================================
// Commands
// ============================================================================

async fn calc_command(config: &CondensaConfig, args: &InputArgs, json: bool) -> Result<()> {
    let state = resolve_inputs(config, args).await?;
    let assessment = assess(&state.calculation_input(), &config.thresholds, &config.diagram)?;
    debug!(result = ?assessment.result, "calculation done");

    if json {
        let report = CalcReport::new(&assessment, state.source());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_assessment(&assessment, state.source()));
    }

    Ok(())
}

async fn diagram_command(
    config: &CondensaConfig,
    args: &InputArgs,
    output: Option<&Path>,
) -> Result<()> {
    let state = resolve_inputs(config, args).await?;
    let assessment = assess(&state.calculation_input(), &config.thresholds, &config.diagram)?;
    let json = serde_json::to_string_pretty(&assessment.diagram)?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display().to_string().cyan());
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn lookup_command(config: &CondensaConfig, place: &str, json: bool) -> Result<()> {
    let client = OpenMeteoClient::with_config(config.weather.clone())?;
    let observation = client.lookup(place).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&observation)?);
    } else {
        print!("{}", render_observation(&observation));
    }

    Ok(())
}
