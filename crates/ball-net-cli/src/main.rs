//! ballnet: Command-line interface for papercraft ball net generation.
//!
//! This tool exposes the ball-net pipeline from the command line, suitable
//! for scripting and batch export.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=ball_net=info` - Basic operation logging
//! - `RUST_LOG=ball_net=debug` - Detailed layout logging
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Export the classic ball at a 100 mm radius
//! ballnet export -o net.svg --radius 100
//!
//! # Inspect the layout with debug logging
//! RUST_LOG=ball_net=debug ballnet layout --radius 100
//! ```

use std::path::PathBuf;

use anyhow::Result;
use ball_net::SolidKind;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{export, info, layout};

/// ballnet - A command-line tool for papercraft ball net generation.
///
/// Flatten a faceted ball into printable panels with glue tabs and
/// lacing holes.
#[derive(Parser)]
#[command(name = "ballnet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SolidArg {
    /// Classic 32-panel ball (12 pentagons, 20 hexagons)
    Classic,
}

impl From<SolidArg> for SolidKind {
    fn from(arg: SolidArg) -> Self {
        match arg {
            SolidArg::Classic => SolidKind::Classic,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display solid statistics and default parameters
    Info {
        /// Ball solid to inspect
        #[arg(long, default_value = "classic")]
        solid: SolidArg,
    },

    /// Compute the panel layout and report per-panel statistics
    Layout {
        /// Ball solid to lay out
        #[arg(long, default_value = "classic")]
        solid: SolidArg,

        /// Ball radius in mm
        #[arg(long)]
        radius: Option<f64>,

        /// Glue-tab lip width in mm
        #[arg(long)]
        lip: Option<f64>,

        /// Lacing holes per panel edge
        #[arg(long)]
        holes_per_edge: Option<u32>,

        /// Show per-panel statistics
        #[arg(long)]
        detailed: bool,
    },

    /// Generate the net and export it as an SVG document
    Export {
        /// Ball solid to export
        #[arg(long, default_value = "classic")]
        solid: SolidArg,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Ball radius in mm
        #[arg(long)]
        radius: Option<f64>,

        /// Glue-tab lip width in mm
        #[arg(long)]
        lip: Option<f64>,

        /// Lacing holes per panel edge
        #[arg(long)]
        holes_per_edge: Option<u32>,

        /// Lacing hole radius in mm
        #[arg(long)]
        hole_radius: Option<f64>,

        /// Page width in mm
        #[arg(long)]
        page_width: Option<f64>,

        /// Page height in mm
        #[arg(long)]
        page_height: Option<f64>,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    // If quiet, don't initialize any tracing
    if quiet {
        return;
    }

    // Check RUST_LOG first, then fall back to -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "ball_net=info",
            2 => "ball_net=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Install miette's panic hook for better error display in development
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Info { solid } => info::run((*solid).into(), &cli),
        Commands::Layout {
            solid,
            radius,
            lip,
            holes_per_edge,
            detailed,
        } => layout::run(
            (*solid).into(),
            *radius,
            *lip,
            *holes_per_edge,
            *detailed,
            &cli,
        ),
        Commands::Export {
            solid,
            output,
            radius,
            lip,
            holes_per_edge,
            hole_radius,
            page_width,
            page_height,
        } => export::run(
            (*solid).into(),
            output,
            *radius,
            *lip,
            *holes_per_edge,
            *hole_radius,
            *page_width,
            *page_height,
            &cli,
        ),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            // Net errors carry a code and help text worth surfacing
            if let Some(net_err) = e.downcast_ref::<ball_net::NetError>() {
                eprintln!("{}: {}", "Error".red().bold(), net_err);
                eprintln!("  {}: {}", "Code".cyan(), net_err.code());
                if let Some(help) = miette::Diagnostic::help(net_err) {
                    eprintln!("  {}: {}", "Suggestion".green(), help);
                }
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
