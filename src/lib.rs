//! Pokedex - query, export and store a Pokedex
//!
//! Pokedex loads a JSON Pokedex document, answers a fixed set of
//! questions about it (filters, extremes, averages, groupings), exports
//! a five-column summary of every Pokemon to CSV, reads that CSV back
//! and stores it in an SQLite database that can be searched by name.
//!
//! # Quick Start
//!
//! ```bash
//! # Print every query over data/pokemon.json
//! pokedex report
//!
//! # Export the summary CSV and store it in pokemon.db
//! pokedex export
//! pokedex store
//!
//! # Look a Pokemon up in the database
//! pokedex find pika
//!
//! # Everything above in one go
//! pokedex run
//! ```

#![warn(clippy::all)]

pub mod analytics;
pub mod cli;
pub mod config;
pub mod csv_io;
pub mod db;
pub mod error;
pub mod loader;
pub mod models;
pub mod search;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use analytics::{PokedexAnalytics, PokedexReport, ReportOptions};
pub use error::{PokedexError, Result};
pub use models::{Evolution, Pokedex, Pokemon, PokemonRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load a Pokedex and run every query over it
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// let report = pokedex::report(Path::new("data/pokemon.json"), &Default::default())?;
/// println!("{} Pokemon, heaviest: {:?}", report.total, report.heaviest);
/// # Ok::<(), pokedex::PokedexError>(())
/// ```
pub fn report(input: &std::path::Path, options: &ReportOptions) -> Result<PokedexReport> {
    let pokedex = loader::load_pokedex(input)?;
    PokedexAnalytics::new(&pokedex).report(options)
}

/// Export the CSV summary of a Pokedex JSON file
///
/// # Returns
///
/// Number of rows written
pub fn export(input: &std::path::Path, output: &std::path::Path) -> Result<usize> {
    let pokedex = loader::load_pokedex(input)?;
    csv_io::export_csv(&pokedex.pokemon, output)
}
