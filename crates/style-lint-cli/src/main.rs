//! style-lint CLI tool.
//!
//! Usage:
//! ```bash
//! style-lint check [OPTIONS] [PATH]
//! style-lint list-rules
//! style-lint init
//! ```

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod discover;
mod status;

use commands::check::CheckArgs;
use status::ExitStatus;

/// Line-oriented indentation and naming linter
#[derive(Parser)]
#[command(name = "style-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STYLE_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check source files for style issues
    Check(CheckArgs),

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-file issue blocks followed by a summary.
    #[default]
    Text,
    /// The full run summary as JSON.
    Json,
    /// One line per finding.
    Compact,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(&args, cli.config.as_deref()),
        Commands::ListRules => commands::list_rules::run().map(|()| ExitStatus::Success),
        Commands::Init { force } => commands::init::run(force).map(|()| ExitStatus::Success),
    };

    match result {
        Ok(status) => status.into(),
        Err(err) => {
            let mut stderr = std::io::stderr().lock();
            writeln!(stderr, "style-lint failed").ok();
            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }
            ExitStatus::Error.into()
        }
    }
}
