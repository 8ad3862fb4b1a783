//! Configuration management for pokedex

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{PokedexError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Input and output file names
    #[serde(default)]
    pub files: FilesConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the Pokedex JSON and exported CSV
    pub data_dir: PathBuf,
}

/// File name configuration, relative names resolve against the data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Pokedex JSON document
    pub pokedex_json: PathBuf,
    /// CSV file written by `export` and read by `import`/`store`
    pub export_csv: PathBuf,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file
    pub path: PathBuf,
    /// SQL script run after connecting; the built-in script when unset
    pub init_script: Option<PathBuf>,
    /// Create the Pokemon table before running the init script
    pub init_tables: bool,
    /// Log every init script statement at info level
    pub log_script: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            pokedex_json: PathBuf::from("pokemon.json"),
            export_csv: PathBuf::from("pokemon_export.csv"),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pokemon.db"),
            init_script: None,
            init_tables: false,
            log_script: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Level names accepted for `logging.level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl LoggingConfig {
    /// The configured level, if it is one of [`LOG_LEVELS`]
    pub fn valid_level(&self) -> Option<&str> {
        LOG_LEVELS
            .iter()
            .find(|level| level.eq_ignore_ascii_case(self.level.trim()))
            .copied()
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PokedexError::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("pokedex").join("config.toml"))
    }

    /// Load configuration from the default file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PokedexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(path: &Path) -> Result<()> {
        Self::default().save_to(path)
    }

    /// Initialize configuration file
    pub fn init(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(PokedexError::Config(
                "Configuration file already exists. Use --force to overwrite.".into()
            ));
        }

        Self::default().save_to(path)
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "general.data_dir" => Some(self.general.data_dir.display().to_string()),

            "files.pokedex_json" => Some(self.files.pokedex_json.display().to_string()),
            "files.export_csv" => Some(self.files.export_csv.display().to_string()),

            "database.path" => Some(self.database.path.display().to_string()),
            "database.init_script" => self.database.init_script.as_ref().map(|p| p.display().to_string()),
            "database.init_tables" => Some(self.database.init_tables.to_string()),
            "database.log_script" => Some(self.database.log_script.to_string()),

            "logging.level" => Some(self.logging.level.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "general.data_dir" => {
                self.general.data_dir = PathBuf::from(value);
            }

            "files.pokedex_json" => {
                self.files.pokedex_json = PathBuf::from(value);
            }
            "files.export_csv" => {
                self.files.export_csv = PathBuf::from(value);
            }

            "database.path" => {
                self.database.path = PathBuf::from(value);
            }
            "database.init_script" => {
                self.database.init_script = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
            }
            "database.init_tables" => {
                self.database.init_tables = value.parse().map_err(|_| {
                    PokedexError::Config("Invalid boolean for init_tables".into())
                })?;
            }
            "database.log_script" => {
                self.database.log_script = value.parse().map_err(|_| {
                    PokedexError::Config("Invalid boolean for log_script".into())
                })?;
            }

            "logging.level" => {
                let level = LOG_LEVELS
                    .iter()
                    .find(|level| level.eq_ignore_ascii_case(value.trim()))
                    .ok_or_else(|| {
                        PokedexError::Config(format!(
                            "Invalid log level '{}', expected one of: {}",
                            value,
                            LOG_LEVELS.join(", ")
                        ))
                    })?;
                self.logging.level = level.to_string();
            }

            _ => {
                return Err(PokedexError::Config(format!("Unknown configuration key: {}", key)));
            }
        }

        Ok(())
    }

    /// Path of the Pokedex JSON document
    pub fn pokedex_path(&self) -> PathBuf {
        self.general.data_dir.join(&self.files.pokedex_json)
    }

    /// Path of the exported CSV file
    pub fn export_path(&self) -> PathBuf {
        self.general.data_dir.join(&self.files.export_csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pokedex_path(), PathBuf::from("data/pokemon.json"));
        assert_eq!(config.export_path(), PathBuf::from("data/pokemon_export.csv"));
        assert_eq!(config.database.path, PathBuf::from("pokemon.db"));
        assert!(!config.database.init_tables);
        assert!(config.database.init_script.is_none());
    }

    #[test]
    fn test_absolute_file_ignores_data_dir() {
        let mut config = Config::default();
        config.set("files.pokedex_json", "/srv/pokedex.json").unwrap();
        assert_eq!(config.pokedex_path(), PathBuf::from("/srv/pokedex.json"));
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        config.set("database.init_tables", "true").unwrap();
        assert_eq!(config.get("database.init_tables"), Some("true".to_string()));

        config.set("general.data_dir", "/tmp/pokedex").unwrap();
        assert_eq!(config.get("general.data_dir"), Some("/tmp/pokedex".to_string()));

        assert!(config.set("database.log_script", "maybe").is_err());
        assert!(config.set("no.such.key", "1").is_err());
        assert_eq!(config.get("database.init_script"), None);
    }

    #[test]
    fn test_log_level_validation() {
        let mut config = Config::default();

        config.set("logging.level", "DEBUG").unwrap();
        assert_eq!(config.get("logging.level"), Some("debug".to_string()));

        assert!(config.set("logging.level", "loud").is_err());
        assert_eq!(config.logging.level, "debug");

        config.logging.level = "loud".to_string();
        assert_eq!(config.logging.valid_level(), None);
        config.logging.level = " Warn".to_string();
        assert_eq!(config.logging.valid_level(), Some("warn"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pokedex").join("config.toml");

        let mut config = Config::default();
        config.set("logging.level", "debug").unwrap();
        config.set("database.init_script", "scripts/init.sql").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.database.init_script, Some(PathBuf::from("scripts/init.sql")));

        assert!(Config::init(&path, false).is_err());
        Config::init(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().logging.level, "info");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.files.pokedex_json, PathBuf::from("pokemon.json"));
    }
}
