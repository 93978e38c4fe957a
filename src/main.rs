//! Load balancer configuration tool.
//!
//! Loads a config document (or the built-in defaults), validates it and
//! prints the resulting configuration.
//!
//! # Exit Status
//! - 0: configuration is valid
//! - non-zero: fatal load error, or unknown fields with `--deny-unknown`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use balancer_config::config::BalancerConfig;
use balancer_config::observability::logging;

#[derive(Parser)]
#[command(name = "balancer-config")]
#[command(about = "Validate and print load balancer configuration", long_about = None)]
struct Cli {
    /// Config document to load. Defaults are used when omitted.
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Treat unknown fields as an error.
    #[arg(long)]
    deny_unknown: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(logging::DEFAULT_FILTER)?;

    let (config, diagnostic) = match &cli.config {
        Some(path) => match balancer_config::load_config(path) {
            Ok(loaded) => loaded.into_parts(),
            Err(e) => {
                tracing::error!("{}: {}", e.severity(), e);
                return Err(e.into());
            }
        },
        None => (BalancerConfig::from_defaults(), None),
    };

    match cli.format {
        Format::Text => println!("{config}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&config.to_document())?),
    }

    if let Some(diag) = diagnostic {
        if cli.deny_unknown {
            return Err(diag.into());
        }
    }

    Ok(())
}
