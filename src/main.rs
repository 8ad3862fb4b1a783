//! Pokedex - query, export and store a Pokedex
//!
//! Main entry point for the pokedex CLI application.

use std::process::ExitCode;

use console::style;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pokedex::cli::{self, Cli, Commands};
use pokedex::config::Config;
use pokedex::error::Result;

/// Application banner
const BANNER: &str = r#"
  ____       _            _
 |  _ \ ___ | | _____  __| | _____  __
 | |_) / _ \| |/ / _ \/ _` |/ _ \ \/ /
 |  __/ (_) |   <  __/ (_| |  __/>  <
 |_|   \___/|_|\_\___|\__,_|\___/_/\_\
"#;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // The log level may come from the config file, so load it first
    let config = cli.load_config();
    setup_logging(&cli, config.as_ref().ok());

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Set up logging based on CLI arguments and configuration
fn setup_logging(cli: &Cli, config: Option<&Config>) {
    let level = log_level(cli, config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    if let Some(config) = config.filter(|c| c.logging.valid_level().is_none()) {
        warn!("Ignoring invalid logging.level '{}', using info", config.logging.level);
    }
}

fn log_level<'a>(cli: &Cli, config: Option<&'a Config>) -> &'a str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        config.and_then(|c| c.logging.valid_level()).unwrap_or("info")
    }
}

/// Main application logic
///
/// `config` subcommands read the file themselves so a malformed file can
/// still be reset; every other command needs it loaded.
fn run(cli: Cli, config: Result<Config>) -> Result<()> {
    if let Commands::Config(ref args) = cli.command {
        return cli::execute_config(args, &cli);
    }
    let config = config?;

    if !cli.quiet {
        if let Commands::Run(_) = cli.command {
            println!("{}", style(BANNER).yellow());
            println!("  {} v{}\n", style("pokedex").bold(), style(pokedex::VERSION).dim());
        }
    }

    match cli.command {
        Commands::Report(ref args) => cli::execute_report(args, &config),
        Commands::Show(ref args) => cli::execute_show(args, &config),
        Commands::Search(ref args) => cli::execute_search(args, &config),
        Commands::Export(ref args) => cli::execute_export(args, &config),
        Commands::Import(ref args) => cli::execute_import(args, &config),
        Commands::Store(ref args) => cli::execute_store(args, &config),
        Commands::Find(ref args) => cli::execute_find(args, &config),
        Commands::Run(ref args) => cli::execute_run(args, &config),
        Commands::Config(ref args) => cli::execute_config(args, &cli),
    }
}
