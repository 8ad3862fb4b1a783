//! SQLite connection ownership and initialisation

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info};

use super::script::run_script;
use crate::config::DatabaseConfig;
use crate::error::{PokedexError, Result};

/// Script run when no custom init script is configured
pub const DEFAULT_INIT_SCRIPT: &str = include_str!("../../sql/init.sql");

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS Pokemon (\
    id INTEGER PRIMARY KEY, num TEXT, name TEXT, height TEXT, weight TEXT)";

/// Owns the database connection used by the repositories
pub struct DatabaseManager {
    conn: Connection,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open the configured database, create the table if requested and
    /// run the init script
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening database {}", config.path.display());
        let conn = Connection::open(&config.path)?;
        let manager = Self {
            conn,
            path: Some(config.path.clone()),
        };
        manager.initialize(config)?;
        Ok(manager)
    }

    /// Open an existing database as is, without running the init script
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            return Err(PokedexError::file_not_found(&config.path));
        }

        debug!("Connecting to database {}", config.path.display());
        Ok(Self {
            conn: Connection::open(&config.path)?,
            path: Some(config.path.clone()),
        })
    }

    /// Open a private in-memory database and initialise it the same way
    pub fn open_in_memory(config: &DatabaseConfig) -> Result<Self> {
        let manager = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        manager.initialize(config)?;
        Ok(manager)
    }

    fn initialize(&self, config: &DatabaseConfig) -> Result<()> {
        if config.init_tables {
            self.init_tables()?;
        }

        let script = match config.init_script {
            Some(ref path) => read_script(path)?,
            None => DEFAULT_INIT_SCRIPT.to_string(),
        };
        self.execute_script(&script, config.log_script)?;
        Ok(())
    }

    /// Create the Pokemon table if it does not exist yet
    pub fn init_tables(&self) -> Result<()> {
        debug!("Ensuring Pokemon table exists");
        self.conn.execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    /// Run an SQL script, statement by statement
    pub fn execute_script(&self, script: &str, log: bool) -> Result<usize> {
        let count = run_script(&self.conn, script, log)?;
        debug!("Init script executed: {} statements", count);
        Ok(count)
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Database file, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, reporting any error
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| PokedexError::Database(e))
    }
}

fn read_script(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PokedexError::file_not_found(path));
    }
    Ok(std::fs::read_to_string(path)?)
}
