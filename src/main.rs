//! VWAP signal scanner - main entry point
//!
//! This binary provides two subcommands:
//! - run: Continuous scanning with the liveness endpoint
//! - scan: Run a single pass and exit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "vwap-sentry")]
#[command(about = "VWAP breakout signal scanner with Discord webhook alerts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scanner continuously
    Run {
        /// Path to configuration file
        #[arg(short, long, default_value = "configs/majors_m15.json")]
        config: String,

        /// Scan interval in seconds (overrides config file)
        #[arg(long)]
        interval: Option<u64>,

        /// Disable the liveness endpoint
        #[arg(long)]
        no_server: bool,
    },

    /// Run a single scan pass and exit
    Scan {
        /// Path to configuration file
        #[arg(short, long, default_value = "configs/majors_m15.json")]
        config: String,
    },
}

fn setup_logging(verbose: bool, command_name: &str) -> Result<()> {
    // Create logs directory
    std::fs::create_dir_all("logs")?;

    // Create log file with naming pattern: {command}_{date}.log
    let log_filename = format!(
        "{}_{}.log",
        command_name,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    );
    let log_path = PathBuf::from("logs").join(&log_filename);

    // Set log level - filter out noisy external crates
    let level = if verbose { "debug" } else { "info" };
    let filter_str = format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn",
        level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let file_appender = tracing_appender::rolling::never("logs", &log_filename);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true);

    // File layer - same format but without ANSI colors
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized");
    info!("Log file: {}", log_path.display());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command_name = match &cli.command {
        Commands::Run { .. } => "run",
        Commands::Scan { .. } => "scan",
    };

    setup_logging(cli.verbose, command_name)?;

    match cli.command {
        Commands::Run {
            config,
            interval,
            no_server,
        } => commands::run::run(config, interval, no_server),

        Commands::Scan { config } => commands::scan::run(config),
    }
}
