//! Pokemon and Pokedex representation, as found in `pokemon.json`

use serde::{Deserialize, Serialize};
use std::fmt;

use super::measure::{parse_measure, strip_unit};
use super::PokemonRecord;
use crate::error::Result;

/// A link to another Pokemon in an evolution chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    /// Pokedex number of the linked Pokemon
    pub num: String,
    /// Name of the linked Pokemon
    pub name: String,
}

impl fmt::Display for Evolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.num, self.name)
    }
}

/// A single Pokedex entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Unique id
    pub id: u32,
    /// Pokedex number ("001")
    #[serde(default)]
    pub num: String,
    /// Name
    pub name: String,
    /// Image URL
    #[serde(default)]
    pub img: String,
    /// Type names ("Grass", "Poison")
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    /// Height with unit ("0.71 m")
    #[serde(default)]
    pub height: String,
    /// Weight with unit ("6.9 kg")
    #[serde(default)]
    pub weight: String,
    /// Candy name
    #[serde(default)]
    pub candy: String,
    /// Candies needed to evolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candy_count: Option<u32>,
    /// Egg distance ("2 km", "Not in Eggs")
    #[serde(default)]
    pub egg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_chance: Option<f64>,
    #[serde(default)]
    pub avg_spawns: f64,
    #[serde(default)]
    pub spawn_time: String,
    /// Evolution CP multipliers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<Vec<f64>>,
    /// Type names this Pokemon is weak to
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Later stages of the evolution chain, absent for final forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_evolution: Option<Vec<Evolution>>,
    /// Earlier stages of the evolution chain, absent for base forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_evolution: Option<Vec<Evolution>>,
}

impl Pokemon {
    /// Create a Pokemon with only the summary fields set
    pub fn new(
        id: u32,
        num: impl Into<String>,
        name: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            id,
            num: num.into(),
            name: name.into(),
            height: height.into(),
            weight: weight.into(),
            ..Self::default()
        }
    }

    /// Numeric height in meters
    pub fn height_value(&self) -> Result<f64> {
        parse_measure(&self.height)
    }

    /// Numeric weight in kilograms
    pub fn weight_value(&self) -> Result<f64> {
        parse_measure(&self.weight)
    }

    /// Check whether the Pokemon has the given type
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Check whether the Pokemon is weak to the given type
    pub fn has_weakness(&self, weakness: &str) -> bool {
        self.weaknesses.iter().any(|w| w == weakness)
    }

    /// Number of next evolutions (0 when the list is absent)
    pub fn next_evolution_count(&self) -> usize {
        self.next_evolution.as_ref().map_or(0, Vec::len)
    }

    /// Check whether the Pokemon evolves from something
    pub fn has_prev_evolution(&self) -> bool {
        self.prev_evolution.is_some()
    }

    /// Flatten into the five column summary used by CSV files and the
    /// database, with units removed from height and weight
    pub fn to_record(&self) -> PokemonRecord {
        PokemonRecord {
            id: self.id,
            num: self.num.clone(),
            name: self.name.clone(),
            height: strip_unit(&self.height).to_string(),
            weight: strip_unit(&self.weight).to_string(),
        }
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {} (id {})", self.num, self.name, self.id)?;
        writeln!(f, "  Type:       {}", self.types.join(", "))?;
        writeln!(f, "  Height:     {}", self.height)?;
        writeln!(f, "  Weight:     {}", self.weight)?;
        writeln!(f, "  Weaknesses: {}", self.weaknesses.join(", "))?;
        if !self.candy.is_empty() {
            match self.candy_count {
                Some(count) => writeln!(f, "  Candy:      {} ({})", self.candy, count)?,
                None => writeln!(f, "  Candy:      {}", self.candy)?,
            }
        }
        if !self.egg.is_empty() {
            writeln!(f, "  Egg:        {}", self.egg)?;
        }
        if let Some(ref prev) = self.prev_evolution {
            let names: Vec<String> = prev.iter().map(ToString::to_string).collect();
            writeln!(f, "  Evolves from: {}", names.join(", "))?;
        }
        if let Some(ref next) = self.next_evolution {
            let names: Vec<String> = next.iter().map(ToString::to_string).collect();
            writeln!(f, "  Evolves into: {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// The whole Pokedex document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokedex {
    pub pokemon: Vec<Pokemon>,
}

impl Pokedex {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    /// Whether the Pokedex has no entries
    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    /// Names of every entry, in file order
    pub fn names(&self) -> Vec<&str> {
        self.pokemon.iter().map(|p| p.name.as_str()).collect()
    }
}
