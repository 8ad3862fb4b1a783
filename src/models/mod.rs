//! Data models for the Pokedex and its flat summary records

mod measure;
mod pokemon;
mod record;

pub use measure::*;
pub use pokemon::*;
pub use record::*;
