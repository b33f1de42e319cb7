//! Ticket Triage Control - CLI for the keyword triage engine
//!
//! Classifies support ticket messages from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use triage_shared::VERSION;
use triagectl::commands;

#[derive(Parser)]
#[command(name = "triagectl")]
#[command(about = "Ticket Triage - keyword-based support ticket classification", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a ticket message
    Analyze {
        /// Message text (words are joined with spaces)
        message: Vec<String>,

        /// Read the message from stdin instead
        #[arg(long, conflicts_with = "message")]
        stdin: bool,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Rules file (defaults to $TRIAGE_RULES, then /etc/triage/rules.toml)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Print the effective keyword rules as TOML
    Rules {
        /// Rules file to print instead of the default lookup
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Validate a rules file
    CheckRules {
        path: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            message,
            stdin,
            json,
            rules,
        } => commands::analyze_command(&message, stdin, json, rules.as_deref()),
        Commands::Rules { rules } => {
            commands::rules_command(rules.as_deref(), &mut std::io::stdout().lock())
        }
        Commands::CheckRules { path } => {
            commands::check_rules_command(&path, &mut std::io::stdout().lock())
        }
    }
}
