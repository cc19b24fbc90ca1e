//! Trinomial CLI - Command Line Driver for One-Step Trinomial Option Pricing
//!
//! Thin operational entry point around `pricer_lattice`.
//!
//! # Commands
//!
//! - `trinomial price` - Price a European call or put
//! - `trinomial probabilities` - Show the risk-neutral branching probabilities
//!
//! Inputs come from a TOML file (`--config`, default `trinomial.toml`),
//! overridden by environment variables and then by command-line flags.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::RequestOverrides;
use config::PricerConfig;

/// One-step trinomial option pricer
#[derive(Parser)]
#[command(name = "trinomial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "trinomial.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price {
        #[command(flatten)]
        overrides: RequestOverrides,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show risk-neutral probabilities and terminal nodes
    Probabilities {
        #[command(flatten)]
        overrides: RequestOverrides,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PricerConfig::load_or_default(Path::new(&cli.config))?.with_env_override();
    config.validate()?;

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration loaded from {}", cli.config);

    match cli.command {
        Commands::Price { overrides, format } => {
            commands::price::run(&overrides.apply(config.request), &format)
        }
        Commands::Probabilities { overrides } => {
            commands::probabilities::run(&overrides.apply(config.request))
        }
    }
}
