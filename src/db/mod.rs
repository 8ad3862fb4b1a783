//! SQLite persistence of Pokemon summaries

pub mod manager;
pub mod repository;
pub mod script;

pub use manager::{DatabaseManager, DEFAULT_INIT_SCRIPT};
pub use repository::{CrudRepository, PokemonRepository, SqlitePokemonRepository};
pub use script::{run_script, split_statements};
