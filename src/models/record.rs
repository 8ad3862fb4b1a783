//! Flat five column Pokemon summary shared by CSV files and the database

use serde::{Deserialize, Serialize};
use std::fmt;

use super::measure::parse_measure;
use super::Pokemon;
use crate::error::Result;

/// Summary of a Pokemon: `id, num, name, height, weight`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub num: String,
    pub name: String,
    /// Height text, usually without unit once exported
    pub height: String,
    /// Weight text, usually without unit once exported
    pub weight: String,
}

impl PokemonRecord {
    /// Numeric height
    pub fn height_value(&self) -> Result<f64> {
        parse_measure(&self.height)
    }

    /// Numeric weight
    pub fn weight_value(&self) -> Result<f64> {
        parse_measure(&self.weight)
    }
}

impl From<&Pokemon> for PokemonRecord {
    fn from(pokemon: &Pokemon) -> Self {
        pokemon.to_record()
    }
}

impl From<PokemonRecord> for Pokemon {
    fn from(record: PokemonRecord) -> Self {
        Pokemon::new(record.id, record.num, record.name, record.height, record.weight)
    }
}

impl fmt::Display for PokemonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  #{:<4} {:<12} height {:<6} weight {}",
            self.id, self.num, self.name, self.height, self.weight
        )
    }
}
