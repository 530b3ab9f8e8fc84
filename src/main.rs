use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

/// Hypernode node utilities
#[derive(Parser)]
#[command(name = "hypernode-tools")]
#[command(about = "Hypernode node utilities - telemetry summaries, metrics, rewards", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a JSONL telemetry log
    Telemetry {
        /// Path to telemetry JSONL file
        #[arg(long)]
        file: PathBuf,

        /// Treat malformed JSON lines as fatal instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Print current node CPU/memory metrics as JSON
    Metrics,
    /// Convert reward points to HYPER
    Convert {
        /// Points to convert
        #[arg(long)]
        points: f64,

        /// Conversion coefficient
        #[arg(long, default_value_t = hypernode_tools::rewards::DEFAULT_ALPHA)]
        alpha: f64,

        /// Node reputation multiplier
        #[arg(long, default_value_t = hypernode_tools::rewards::DEFAULT_REPUTATION)]
        reputation: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("hypernode-tools started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Telemetry { file, strict } => hypernode_tools::telemetry::run(&file, strict),
        Commands::Metrics => hypernode_tools::metrics::run(),
        Commands::Convert {
            points,
            alpha,
            reputation,
        } => hypernode_tools::rewards::run(points, alpha, reputation),
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
