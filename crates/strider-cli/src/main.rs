//! Strider Command-Line Interface
//!
//! The main entry point for the `strider` CLI tool.
//!
//! ```text
//!              S T R I D E R
//!     Coined Quantum Walks on the Lattice
//!
//!   ·←·←·←·←·  ⟲coin⟳  ·→·→·→·→·
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, version, walk};

/// Strider - coined quantum walk construction and sampling
#[derive(Parser)]
#[command(name = "strider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a 1D coined walk and print its distribution
    Walk1d {
        /// Number of walk steps
        #[arg(short, long)]
        steps: u32,

        /// Initial coin state (symmetric, asymmetric)
        #[arg(short, long, default_value = "symmetric")]
        coin: String,

        /// Number of shots
        #[arg(long, default_value = "1024")]
        shots: u32,

        /// Gaussian smoothing standard deviation (omit for raw output)
        #[arg(long)]
        smooth: Option<f64>,

        /// Execution backend (simulator)
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Write distribution and statistics as JSON to this file
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Run a 2D coined walk and print its distribution
    Walk2d {
        /// Number of walk steps
        #[arg(short, long)]
        steps: u32,

        /// Initial coin state (symmetric, asymmetric)
        #[arg(short, long, default_value = "symmetric")]
        coin: String,

        /// Number of shots
        #[arg(long, default_value = "2048")]
        shots: u32,

        /// Gaussian smoothing standard deviation (omit for raw output)
        #[arg(long)]
        smooth: Option<f64>,

        /// Execution backend (simulator)
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Write distribution and statistics as JSON to this file
        #[arg(short, long)]
        export: Option<String>,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Walk1d {
            steps,
            coin,
            shots,
            smooth,
            backend,
            export,
        } => walk::execute_1d(steps, &coin, shots, smooth, &backend, export.as_deref()).await,

        Commands::Walk2d {
            steps,
            coin,
            shots,
            smooth,
            backend,
            export,
        } => walk::execute_2d(steps, &coin, shots, smooth, &backend, export.as_deref()).await,

        Commands::Backends => {
            backends::execute().await;
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
