//! Timeline configuration.
//!
//! The data directory is resolved through a chain:
//!
//! 1. `--data-dir <path>`: explicit per-command override
//! 2. `TIMELINE_DATA_DIR` env var: process/session level
//! 3. `data-dir` in `~/.timeline/config.toml`: user default
//! 4. `~/.timeline/data`: built-in fallback
//!
//! The config file is optional. A missing file is fine; an unreadable or
//! invalid one is an error.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "TIMELINE_DATA_DIR";

/// Contents of `~/.timeline/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Where the timeline is stored.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.timeline/config.toml`.
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields the default.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.timeline/config.toml`.
    pub fn path() -> Option<PathBuf> {
        home_dir().map(|h| h.join("config.toml"))
    }

    /// Resolve the data directory from the resolution chain.
    pub fn resolve_data_dir(&self, explicit: Option<&Path>) -> Result<PathBuf, String> {
        resolve_data_dir(explicit, env::var(DATA_DIR_ENV).ok().as_deref(), self)
    }
}

/// The resolution chain with every input passed in, so it can be tested
/// without touching the process environment.
fn resolve_data_dir(
    explicit: Option<&Path>,
    from_env: Option<&str>,
    config: &Config,
) -> Result<PathBuf, String> {
    // 1. Explicit --data-dir flag.
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    // 2. TIMELINE_DATA_DIR environment variable.
    if let Some(dir) = from_env
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    // 3. ~/.timeline/config.toml.
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    // 4. Built-in default.
    home_dir()
        .map(|h| h.join("data"))
        .ok_or_else(|| "could not determine home directory".to_string())
}

/// `~/.timeline`.
fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".timeline"))
}
