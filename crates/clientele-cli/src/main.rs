//! Clientele CLI
//!
//! Command-line interface for Clientele

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clientele_core::logging_facility::{self, Profile};
use clientele_store::config::{resolve_base_dir, CONFIG_FILE_NAME};
use clientele_store::Config;

mod commands;
mod view;

#[derive(Debug, Parser)]
#[command(name = "clientele")]
#[command(about = "Clientele - contact book for insurance agents", long_about = None)]
struct Cli {
    /// Directory holding config.toml, preferences and data files
    /// (default: $CLIENTELE_HOME, else the current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Logging profile: development, production, quiet or test
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive session (the default)
    Repl,
    /// Execute a single command line and exit
    Run(commands::run::RunArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let base_dir = resolve_base_dir(cli.data_dir);
    let config = Config::load(&base_dir.join(CONFIG_FILE_NAME))?;
    let profile = match cli.log_profile {
        Some(profile) => profile,
        None => config.profile()?,
    };
    logging_facility::init(profile);
    tracing::debug!(base_dir = %base_dir.display(), ?profile, "starting clientele");

    let mut logic = clientele_engine::open(&base_dir, &config);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::execute(&mut logic),
        Commands::Run(args) => commands::run::execute(&mut logic, args),
    }
}
