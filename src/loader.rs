//! Loading the Pokedex JSON document

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PokedexError, Result};
use crate::models::Pokedex;

/// Load a Pokedex from a JSON file
pub fn load_pokedex(path: &Path) -> Result<Pokedex> {
    if !path.exists() {
        return Err(PokedexError::file_not_found(path));
    }

    debug!("Reading Pokedex from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let pokedex: Pokedex = serde_json::from_reader(reader)?;

    info!("Pokedex loaded: {} Pokemon", pokedex.len());
    Ok(pokedex)
}

/// Parse a Pokedex from an in-memory JSON document
pub fn parse_pokedex(json: &str) -> Result<Pokedex> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SAMPLE_JSON;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pokemon.json");
        std::fs::write(&path, SAMPLE_JSON).unwrap();

        let pokedex = load_pokedex(&path).unwrap();
        assert_eq!(pokedex.len(), 9);
        assert_eq!(pokedex.pokemon[7].name, "Pikachu");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_pokedex(&temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(PokedexError::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_pokedex("{\"pokemon\": [");
        assert!(matches!(result, Err(PokedexError::Serialization(_))));
    }

    #[test]
    fn test_empty_document() {
        let pokedex = parse_pokedex(r#"{"pokemon": []}"#).unwrap();
        assert!(pokedex.is_empty());
    }
}
