//! Runtime configuration read from the environment.
//!
//! | Variable         | Default     | Meaning                                   |
//! |------------------|-------------|-------------------------------------------|
//! | `TASKLIST_STORE` | `.tasklist` | directory holding storage slots           |
//! | `TASKLIST_SLOT`  | `tasks`     | slot name for the task sequence           |
//! | `TASKLIST_ID`    | `uuid`      | id strategy: uuid, timestamp, sequential  |
//!
//! A `.env` file in the working directory is loaded first, if present.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::persistence::DEFAULT_SLOT;

/// Environment variable naming the storage directory.
pub const STORE_VAR: &str = "TASKLIST_STORE";
/// Environment variable naming the storage slot.
pub const SLOT_VAR: &str = "TASKLIST_SLOT";
/// Environment variable selecting the id strategy.
pub const ID_VAR: &str = "TASKLIST_ID";

/// How new task ids are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Uuid,
    /// Millisecond timestamps from the system clock.
    Timestamp,
    /// One past the largest numeric id already stored.
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "timestamp" => Ok(Self::Timestamp),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!(
                "Unknown id strategy '{other}' (expected uuid, timestamp or sequential)"
            )),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uuid => "uuid",
            Self::Timestamp => "timestamp",
            Self::Sequential => "sequential",
        })
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding storage slots.
    pub store_dir: PathBuf,
    /// Slot name holding the task sequence.
    pub slot: String,
    /// How new ids are generated.
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".tasklist"),
            slot: DEFAULT_SLOT.to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    /// Loads `.env` (if any) and reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Ok(Self {
            store_dir: get(STORE_VAR).map_or(defaults.store_dir, PathBuf::from),
            slot: get(SLOT_VAR).unwrap_or(defaults.slot),
            id_strategy: get(ID_VAR)
                .map(|v| v.parse::<IdStrategy>())
                .transpose()
                .map_err(|e| format!("{ID_VAR}: {e}"))?
                .unwrap_or(defaults.id_strategy),
        })
    }

    /// Returns a copy with the storage directory replaced, if one is given.
    #[must_use]
    pub fn with_store_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.store_dir = dir;
        }
        self
    }
}
