//! CSV export and import of Pokemon summaries
//!
//! Files carry no header row and every field is quoted:
//!
//! ```text
//! "1","001","Bulbasaur","0.71","6.9"
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::error::{PokedexError, Result};
use crate::models::{Pokemon, PokemonRecord};

/// Number of columns in a summary row
pub const COLUMNS: usize = 5;

/// Write summaries of `pokemon` to any writer, returning the row count
pub fn write_records<W: Write>(writer: W, pokemon: &[Pokemon]) -> Result<usize> {
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    for p in pokemon {
        let record = p.to_record();
        csv.write_record([
            record.id.to_string().as_str(),
            record.num.as_str(),
            record.name.as_str(),
            record.height.as_str(),
            record.weight.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(pokemon.len())
}

/// Export summaries of `pokemon` to a CSV file
pub fn export_csv(pokemon: &[Pokemon], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let rows = write_records(File::create(path)?, pokemon)?;
    info!("Exported {} Pokemon to {}", rows, path.display());
    Ok(rows)
}

/// Read summaries from any reader
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PokemonRecord>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv.records() {
        let row = row?;
        records.push(parse_row(&row)?);
    }

    debug!("Read {} CSV records", records.len());
    Ok(records)
}

/// Read summaries from a CSV file
pub fn read_csv(path: &Path) -> Result<Vec<PokemonRecord>> {
    if !path.exists() {
        return Err(PokedexError::file_not_found(path));
    }

    let records = read_records(File::open(path)?)?;
    info!("Read {} Pokemon from {}", records.len(), path.display());
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<PokemonRecord> {
    let line = row.position().map_or(0, |pos| pos.line());

    if row.len() < COLUMNS {
        return Err(PokedexError::record(
            line,
            format!("expected {} fields, found {}", COLUMNS, row.len()),
        ));
    }

    let id = row[0]
        .trim()
        .parse::<u32>()
        .map_err(|_| PokedexError::record(line, format!("invalid id '{}'", &row[0])))?;

    Ok(PokemonRecord {
        id,
        num: row[1].to_string(),
        name: row[2].to_string(),
        height: row[3].to_string(),
        weight: row[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_pokedex;
    use tempfile::TempDir;

    #[test]
    fn test_write_format() {
        let pokemon = vec![Pokemon::new(1, "001", "Bulbasaur", "0.71 m", "6.9 kg")];
        let mut out = Vec::new();
        let rows = write_records(&mut out, &pokemon).unwrap();

        assert_eq!(rows, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"1\",\"001\",\"Bulbasaur\",\"0.71\",\"6.9\"\n"
        );
    }

    #[test]
    fn test_export_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("pokemon.csv");
        let pokedex = sample_pokedex();

        let rows = export_csv(&pokedex.pokemon, &path).unwrap();
        assert_eq!(rows, 9);

        let records = read_csv(&path).unwrap();
        assert_eq!(records.len(), 9);
        assert_eq!(records[7].name, "Pikachu");
        assert_eq!(records[7].id, 25);
        assert_eq!(records[2].weight, "100.0");
    }

    #[test]
    fn test_read_unquoted() {
        let data = "4,004,Charmander,0.61,8.5\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].name, "Charmander");
        assert_eq!(records[0].height_value().unwrap(), 0.61);
    }

    #[test]
    fn test_short_row() {
        let data = "\"1\",\"001\",\"Bulbasaur\"\n";
        let result = read_records(data.as_bytes());
        assert!(matches!(result, Err(PokedexError::InvalidRecord { line: 1, .. })));
    }

    #[test]
    fn test_bad_id() {
        let data = "\"1\",\"001\",\"Bulbasaur\",\"0.71\",\"6.9\"\n\"x\",\"002\",\"Ivysaur\",\"0.99\",\"13.0\"\n";
        let result = read_records(data.as_bytes());
        assert!(matches!(result, Err(PokedexError::InvalidRecord { line: 2, .. })));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_csv(&temp_dir.path().join("missing.csv"));
        assert!(matches!(result, Err(PokedexError::FileNotFound { .. })));
    }
}
