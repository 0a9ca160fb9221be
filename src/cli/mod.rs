//! Command line front end
//!
//! Reads a quote file, prices it with the configured policy and prints the
//! breakdown. This is a presentation layer: all numbers come from the engine
//! already finite, so nothing here re-checks them.

mod report;

pub use report::{format_amount, render_report};

use crate::config::{Config, Validate};
use crate::services::pricing::{FixedCostPolicy, PricingService, Quote};
use crate::utils::error::{PricingError, Result};
use crate::utils::input::parse_optional_amount;
use crate::utils::logging::{LogFormat, LogLevel, LoggingUtils};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "pricing", version, about = "Price print and graphics products")]
pub struct Cli {
    /// Configuration file (YAML, or JSON by extension)
    #[arg(long, short, global = true, env = "PRICING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fixed cost policy: calendar-hours or working-hours. Overrides the config file.
    #[arg(long, global = true)]
    pub policy: Option<FixedCostPolicy>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price the product described by a quote file
    Quote {
        /// Quote file (YAML, or JSON by extension)
        file: PathBuf,

        /// Price you intend to charge; empty means use the suggestion
        #[arg(long, short)]
        manual_price: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    ShowConfig,
}

/// Run a parsed command line, returning what should go to stdout
pub fn run(cli: Cli) -> Result<String> {
    let config = Config::load(cli.config.as_deref())?;

    let level = cli
        .log_level
        .or(config.logging.level)
        .unwrap_or_else(LoggingUtils::get_log_level_from_env);
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        config.logging.format
    };
    LoggingUtils::init_logger(Some(level), format);
    debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Command::Quote {
            file,
            manual_price,
            json,
        } => {
            let pricing = config.pricing_config(cli.policy)?;
            pricing.validate().map_err(PricingError::Validation)?;

            let mut quote = Quote::from_file(&file)?;
            if let Some(text) = manual_price {
                quote.manual_price = parse_optional_amount(&text);
            }

            let service = PricingService::new(pricing);
            let result = service.evaluate(&quote);

            if json {
                Ok(serde_json::to_string_pretty(&result)?)
            } else {
                Ok(render_report(&result, service.config()))
            }
        }
        Command::ShowConfig => {
            let mut config = config;
            if let Some(policy) = cli.policy {
                config.pricing.fixed_cost_policy = Some(policy);
            }
            config.to_yaml()
        }
    }
}

/// Exit code for an error: 2 for bad input, 1 for everything else
pub fn exit_code_for(error: &PricingError) -> u8 {
    if error.is_user_error() { 2 } else { 1 }
}
