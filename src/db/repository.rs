//! Repository traits and their SQLite implementation

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::DatabaseManager;
use crate::error::Result;
use crate::models::PokemonRecord;

/// Basic persistence operations for values of type `T` keyed by `Id`
pub trait CrudRepository<T, Id> {
    /// Insert one value, returning it
    fn save(&self, item: T) -> Result<T>;

    /// Insert many values in a single transaction, returning how many
    fn save_all(&self, items: &[T]) -> Result<usize>;

    /// Look up a value by its id
    fn find_by_id(&self, id: Id) -> Result<Option<T>>;

    /// Every stored value, ordered by id
    fn find_all(&self) -> Result<Vec<T>>;

    /// Number of stored values
    fn count(&self) -> Result<usize>;

    /// Remove every stored value, returning how many were removed
    fn delete_all(&self) -> Result<usize>;
}

/// Pokemon specific queries
pub trait PokemonRepository: CrudRepository<PokemonRecord, u32> {
    /// Pokemon whose name contains `fragment` (ASCII case-insensitive)
    fn find_by_name(&self, fragment: &str) -> Result<Vec<PokemonRecord>>;
}

const INSERT: &str = "INSERT INTO Pokemon (id, num, name, height, weight) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT: &str = "SELECT id, num, name, height, weight FROM Pokemon";

/// [`PokemonRepository`] backed by the `Pokemon` table
pub struct SqlitePokemonRepository<'a> {
    db: &'a DatabaseManager,
}

impl<'a> SqlitePokemonRepository<'a> {
    /// Create a repository over an open database
    pub fn new(db: &'a DatabaseManager) -> Self {
        Self { db }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<PokemonRecord> {
        Ok(PokemonRecord {
            id: row.get(0)?,
            num: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            height: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            weight: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    }
}

impl CrudRepository<PokemonRecord, u32> for SqlitePokemonRepository<'_> {
    fn save(&self, item: PokemonRecord) -> Result<PokemonRecord> {
        self.db.connection().execute(
            INSERT,
            params![item.id, item.num, item.name, item.height, item.weight],
        )?;
        debug!("Saved Pokemon {} ({})", item.id, item.name);
        Ok(item)
    }

    fn save_all(&self, items: &[PokemonRecord]) -> Result<usize> {
        let conn = self.db.connection();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(INSERT)?;
            for item in items {
                stmt.execute(params![item.id, item.num, item.name, item.height, item.weight])?;
            }
        }
        tx.commit()?;
        debug!("Saved {} Pokemon", items.len());
        Ok(items.len())
    }

    fn find_by_id(&self, id: u32) -> Result<Option<PokemonRecord>> {
        let record = self
            .db
            .connection()
            .query_row(&format!("{} WHERE id = ?1", SELECT), params![id], Self::map_row)
            .optional()?;
        Ok(record)
    }

    fn find_all(&self) -> Result<Vec<PokemonRecord>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT))?;
        let records = stmt
            .query_map([], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .connection()
            .query_row("SELECT COUNT(*) FROM Pokemon", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn delete_all(&self) -> Result<usize> {
        Ok(self.db.connection().execute("DELETE FROM Pokemon", [])?)
    }
}

impl PokemonRepository for SqlitePokemonRepository<'_> {
    fn find_by_name(&self, fragment: &str) -> Result<Vec<PokemonRecord>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(&format!("{} WHERE name LIKE ?1 ORDER BY id", SELECT))?;
        let pattern = format!("%{}%", fragment);
        let records = stmt
            .query_map(params![pattern], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("find_by_name('{}'): {} rows", fragment, records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::error::PokedexError;
    use crate::testing::sample_pokedex;

    fn open() -> DatabaseManager {
        let config = DatabaseConfig {
            log_script: false,
            ..DatabaseConfig::default()
        };
        DatabaseManager::open_in_memory(&config).unwrap()
    }

    fn sample_records() -> Vec<PokemonRecord> {
        sample_pokedex().pokemon.iter().map(PokemonRecord::from).collect()
    }

    #[test]
    fn test_save_and_find_by_id() {
        let db = open();
        let repo = SqlitePokemonRepository::new(&db);
        let record = sample_records().remove(0);

        let saved = repo.save(record.clone()).unwrap();
        assert_eq!(saved, record);
        assert_eq!(repo.find_by_id(1).unwrap(), Some(record));
        assert_eq!(repo.find_by_id(99).unwrap(), None);
    }

    #[test]
    fn test_duplicate_id_fails() {
        let db = open();
        let repo = SqlitePokemonRepository::new(&db);
        let record = sample_records().remove(0);

        repo.save(record.clone()).unwrap();
        assert!(matches!(repo.save(record), Err(PokedexError::Database(_))));
    }

    #[test]
    fn test_save_all_and_count() {
        let db = open();
        let repo = SqlitePokemonRepository::new(&db);

        assert_eq!(repo.save_all(&sample_records()).unwrap(), 9);
        assert_eq!(repo.count().unwrap(), 9);

        let all = repo.find_all().unwrap();
        assert_eq!(all.first().map(|r| r.id), Some(1));
        assert_eq!(all.last().map(|r| r.id), Some(26));
    }

    #[test]
    fn test_save_all_rolls_back_on_error() {
        let db = open();
        let repo = SqlitePokemonRepository::new(&db);
        let mut records = sample_records();
        records.push(records[0].clone());

        assert!(repo.save_all(&records).is_err());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_name_partial_and_case_insensitive() {
        let db = open();
        let repo = SqlitePokemonRepository::new(&db);
        repo.save_all(&sample_records()).unwrap();

        let found = repo.find_by_name("pikachu").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].weight, "6.0");

        let found = repo.find_by_name("char").unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Charmander", "Charmeleon", "Charizard"]);

        assert!(repo.find_by_name("mew").unwrap().is_empty());
    }

    #[test]
    fn test_delete_all() {
        let db = open();
        let repo = SqlitePokemonRepository::new(&db);
        repo.save_all(&sample_records()).unwrap();

        assert_eq!(repo.delete_all().unwrap(), 9);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
