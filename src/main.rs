//! Gateway connection limits CLI.
//!
//! ```text
//! gateway.toml
//!     → config::loader (parse & validate)
//!     → LayeredSource (env over [properties])
//!     → DatabaseEnvironment (limits read once)
//!     → validate: print the resolved limits
//!     → evaluate: run one scenario through the LimitResolver
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use gateway_limits::config::{load_config, LayeredSource};
use gateway_limits::observability::{logging, metrics};
use gateway_limits::scenario::Scenario;
use gateway_limits::{DatabaseEnvironment, LimitResolver};

#[derive(Parser)]
#[command(name = "gateway-limits")]
#[command(about = "Inspect and evaluate gateway connection limits", long_about = None)]
struct Cli {
    /// Gateway configuration file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration and print the resolved limits
    Validate,
    /// Decide one connection attempt described by a scenario file
    Evaluate {
        #[arg(short, long)]
        scenario: PathBuf,
    },
}

/// Exit code for a denied connection attempt.
const EXIT_DENIED: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init_logging(&config.observability)?;

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let source = LayeredSource::from_config(&config)?;
    let environment = DatabaseEnvironment::from_source(&source)?;

    tracing::info!(
        config = %cli.config.display(),
        user_required = environment.is_user_required(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Validate => {
            println!("{}", serde_json::to_string_pretty(&environment)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Evaluate { scenario } => {
            let scenario = Scenario::load(&scenario)?;
            let overrides = scenario.override_table()?;
            let resolver = LimitResolver::new(Arc::new(*environment.limits()), Arc::new(overrides));

            let decision = resolver.try_admit(&scenario.request)?;
            println!("{}", serde_json::to_string_pretty(&decision)?);

            if decision.is_admitted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_DENIED))
            }
        }
    }
}
