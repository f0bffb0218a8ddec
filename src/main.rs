use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn};

use motor_health::input::EvaluationInput;
use motor_health::table_types::{render_report, render_thresholds};
use motor_health::{evaluate, logging, server, MonitorConfig, Status};

/// Electric motor health check and time-to-danger forecast
#[derive(Parser, Debug)]
#[command(name = "motor-health")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to config.json in the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one set of readings and print the result
    Check {
        #[command(flatten)]
        input: EvaluationInput,

        /// Print the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Print the effective thresholds
    Thresholds,
    /// Serve evaluations over HTTP
    Serve {
        /// Address to listen on (overrides the config file)
        #[arg(short = 'l', long = "listen", value_name = "ADDR")]
        listen: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug).context("logger already initialized")?;

    let config = MonitorConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Command::Check { input, json } => {
            let report = evaluate(&config, &input.readings(), &input.rates(), input.series)?;
            if report.status != Status::Normal {
                warn!("Motor status is {}", report.status);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report));
            }
        }
        Command::Thresholds => {
            println!("{}", render_thresholds(&config.thresholds));
            let rating = config.thresholds.current_rating();
            println!(
                "current thresholds derived from nominal {} A (x{} / x{})",
                rating.nominal, rating.warning_factor, rating.danger_factor
            );
        }
        Command::Serve { listen } => {
            let listen = listen.unwrap_or(config.server.listen);
            info!("Starting motor-health v{}", env!("CARGO_PKG_VERSION"));
            server::serve(Arc::new(config), listen)
                .await
                .with_context(|| format!("server on {} failed", listen))?;
        }
    }

    Ok(())
}
