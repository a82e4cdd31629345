//! Application entry point for the mobility trace generator.
//!
//! This binary parses the command line, sets up logging and delegates
//! each mode to the [`runner`] module. Any malformed invocation prints the
//! usage text and exits cleanly without touching the file system.

mod runner;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use motion_core::config::{BrownianConfig, TransportConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "motion-generator")]
#[command(version)]
#[command(about = "Synthetic mobility traces with per-tick proximity graphs")]
struct Cli {
    /// Seed for the random source (drawn from OS entropy when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Random-walk motion on a rectangular field
    Brownian {
        /// Field width
        width: u32,
        /// Field height
        height: u32,
        /// Number of nodes
        node_count: u32,
        /// Number of generations (time steps)
        generation_count: u32,
        /// Output trace document
        output: PathBuf,
    },
    /// Motion along the edges of a transport graph
    Transport {
        /// Input document describing the transport graph
        input: PathBuf,
        /// Output trace document
        output: PathBuf,
        /// Number of nodes
        node_count: u32,
        /// Number of generations (time steps)
        generation_count: u32,
    },
}

const MODES: [&str; 3] = ["brownian", "transport", "help"];

/// Lower-cases the mode token so `Brownian` and `TRANSPORT` are accepted.
///
/// Only the first argument after the program name is touched; paths keep
/// their case.
fn normalize_mode(mut args: Vec<OsString>) -> Vec<OsString> {
    if let Some(mode) = args.get_mut(1)
        && let Some(text) = mode.to_str()
        && MODES.iter().any(|m| m.eq_ignore_ascii_case(text))
    {
        *mode = OsString::from(text.to_ascii_lowercase());
    }
    args
}

fn print_usage(err: &clap::Error) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.print()?,
        _ => Cli::command().print_help()?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse_from(normalize_mode(std::env::args_os().collect())) {
        Ok(cli) => cli,
        Err(err) => return print_usage(&err),
    };

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, "random source seeded");

    match command {
        Commands::Brownian {
            width,
            height,
            node_count,
            generation_count,
            output,
        } => {
            let cfg = BrownianConfig {
                width,
                height,
                node_count,
                generation_count,
            };
            runner::brownian(&cfg, &output, seed)
        }
        Commands::Transport {
            input,
            output,
            node_count,
            generation_count,
        } => {
            if !input_exists(&input) {
                Cli::command().print_help()?;
                return Ok(());
            }
            let cfg = TransportConfig {
                node_count,
                generation_count,
            };
            runner::transport(&input, &output, &cfg, seed)
        }
    }
}

/// Returns `true` if the transport input names an existing regular file.
fn input_exists(input: &Path) -> bool {
    input.is_file()
}
