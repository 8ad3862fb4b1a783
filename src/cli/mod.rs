//! Command-line interface for pokedex

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analytics::ReportOptions;
use crate::config::Config;
use crate::error::Result;

/// Pokedex - query a Pokedex, export it to CSV and store it in SQLite
///
/// Loads `pokemon.json` from the data directory, answers questions about
/// it, writes a CSV summary and keeps that summary in a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "POKEDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data directory (overrides general.data_dir)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Database file (overrides database.path)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every analytic query over the Pokedex
    Report(ReportArgs),

    /// Show one Pokemon
    Show(ShowArgs),

    /// Search Pokemon names in the Pokedex
    Search(SearchArgs),

    /// Export the Pokedex summary to CSV
    Export(ExportArgs),

    /// Read an exported CSV file
    Import(ImportArgs),

    /// Store an exported CSV file in the database
    Store(StoreArgs),

    /// Find stored Pokemon by (partial) name
    Find(FindArgs),

    /// Report, export, import, store and look up, in one go
    Run(RunArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable pretty output
    Pretty,
    /// JSON output
    Json,
    /// TOML output
    Toml,
}

/// Query parameters shared by `report` and `run`
#[derive(Parser, Debug, Clone)]
pub struct ReportQueryArgs {
    /// Number of names listed from the start of the Pokedex
    #[arg(long, default_value = "10")]
    pub first: usize,

    /// Number of names listed from the end of the Pokedex
    #[arg(long, default_value = "5")]
    pub last: usize,

    /// Pokemon shown in detail
    #[arg(long, default_value = "Pikachu")]
    pub pokemon: String,

    /// Pokemon whose next evolution is shown
    #[arg(long, default_value = "Charmander")]
    pub evolution_of: String,

    /// Type used by the type filters
    #[arg(long = "type", default_value = "Fire")]
    pub type_name: String,

    /// Weaknesses for the "weak to any" filter (repeatable)
    #[arg(long, default_values_t = [String::from("Water"), String::from("Electric")])]
    pub weak_to: Vec<String>,

    /// Exact number of weaknesses to count
    #[arg(long, default_value = "1")]
    pub weakness_count: usize,
}

impl ReportQueryArgs {
    /// Convert into report options
    pub fn to_options(&self) -> ReportOptions {
        ReportOptions {
            first_count: self.first,
            last_count: self.last,
            pokemon_name: self.pokemon.clone(),
            evolution_of: self.evolution_of.clone(),
            type_name: self.type_name.clone(),
            weak_to: self.weak_to.clone(),
            weakness_count: self.weakness_count,
        }
    }
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub query: ReportQueryArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Pokemon name (case-insensitive)
    #[arg(required = true)]
    pub name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in Pokemon names
    #[arg(required = true)]
    pub query: String,

    /// Include fuzzy matches
    #[arg(short = 'z', long)]
    pub fuzzy: bool,

    /// Maximum results to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output CSV file (default: data directory / files.export_csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Input CSV file (default: data directory / files.export_csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Arguments for the store command
#[derive(Parser, Debug)]
pub struct StoreArgs {
    /// Input CSV file (default: data directory / files.export_csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the find command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Name fragment
    #[arg(required = true)]
    pub name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub query: ReportQueryArgs,

    /// Name looked up in the database at the end
    #[arg(long, default_value = "Pikachu")]
    pub find: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show the configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Configuration file in effect
    pub fn config_file(&self) -> Result<PathBuf> {
        match self.config {
            Some(ref path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Load the configuration and apply command line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from(&self.config_file()?)?;

        if let Some(ref dir) = self.data_dir {
            config.general.data_dir = dir.clone();
        }
        if let Some(ref path) = self.database {
            config.database.path = path.clone();
        }

        Ok(config)
    }
}
