//! messaging-bridge
//!
//! Command-line front end for deploying the messaging contracts and
//! sending or consuming cross-domain messages.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env ──▶ config ──┬──▶ deploy ──────────▶ forge script (inherited stdio)
//!                     │
//!                     └──▶ messaging ──▶ blockchain ──▶ JSON-RPC endpoint
//!                           selector      wallet
//!                           payload       tx builder
//! ```
//!
//! Results go to stdout, logs to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use messaging_bridge::commands::{self, Outcome};
use messaging_bridge::config::{load_settings, BridgeConfig, Requirement, Settings};
use messaging_bridge::error::{BridgeError, BridgeResult, EXIT_FAILURE};
use messaging_bridge::lifecycle::interrupted;
use messaging_bridge::messaging::Payload;
use messaging_bridge::observability::init_logging;

#[derive(Parser)]
#[command(name = "messaging-bridge", version)]
#[command(about = "Deploy the messaging contracts and send or consume cross-domain messages", long_about = None)]
struct Cli {
    /// Key=value file loaded into the environment
    #[arg(long, global = true, default_value = ".env")]
    env_file: PathBuf,

    /// Optional TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the messaging contracts with the deployment script
    DeployMessagingContracts,
    /// Send a message to the L2 contract
    SendMsg {
        /// Function name on the L2 contract
        #[arg(long)]
        selector_str: String,
        /// Message payload, e.g. "[1,2]"
        #[arg(long)]
        payload: Payload,
        /// Print the encoded transaction instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Consume a message sent from L2
    ConsumeMsg {
        /// Message payload, e.g. "[1,2]"
        #[arg(long)]
        payload: Payload,
        /// Print the encoded transaction instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the selector for a function name
    Selector { name: String },
    /// Print usage examples
    Usage,
}

impl Commands {
    /// Env keys the command needs, `None` for offline helpers.
    fn requirement(&self) -> Option<Requirement> {
        match self {
            Self::DeployMessagingContracts => Some(Requirement::Endpoint),
            Self::SendMsg { dry_run: true, .. } | Self::ConsumeMsg { dry_run: true, .. } => {
                Some(Requirement::Target)
            }
            Self::SendMsg { .. } | Self::ConsumeMsg { .. } => Some(Requirement::EndpointAndTarget),
            Self::Selector { .. } | Self::Usage => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => return fail(BridgeError::from(e)),
        },
        None => Settings::default(),
    };

    init_logging(&settings.observability.log_level);

    // The env file is written into the process environment while this is
    // still the only thread.
    let config = match cli.command.requirement() {
        Some(requirement) => match BridgeConfig::load(&cli.env_file, requirement) {
            Ok(config) => config,
            Err(e) => return fail(BridgeError::from(e)),
        },
        None => BridgeConfig::default(),
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let result = runtime.block_on(async {
        tokio::select! {
            result = run(cli.command, settings, config) => result,
            _ = interrupted() => Err(BridgeError::Interrupted),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(e: BridgeError) -> ExitCode {
    tracing::debug!(error = ?e, "Command failed");
    eprintln!("Error: {}", e);
    ExitCode::from(e.exit_code())
}

async fn run(command: Commands, settings: Settings, config: BridgeConfig) -> BridgeResult<()> {
    match command {
        Commands::DeployMessagingContracts => {
            let report = commands::deploy_messaging_contracts(&settings, &config).await?;
            println!("{}", commands::render(&report)?);
        }
        Commands::SendMsg {
            selector_str,
            payload,
            dry_run,
        } => {
            let outcome = commands::send_msg(&settings, &config, &selector_str, &payload, dry_run).await?;
            print_outcome(&outcome)?;
        }
        Commands::ConsumeMsg { payload, dry_run } => {
            let outcome = commands::consume_msg(&settings, &config, &payload, dry_run).await?;
            print_outcome(&outcome)?;
        }
        Commands::Selector { name } => {
            println!("{}", commands::selector(&name)?);
        }
        Commands::Usage => {
            println!("{}", commands::usage());
        }
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome) -> BridgeResult<()> {
    match outcome {
        Outcome::Prepared(request) => {
            println!("{}", commands::render(request)?);
        }
        Outcome::Submitted(submission) => println!("{}", submission.tx_hash),
    }
    Ok(())
}
