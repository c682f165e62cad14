//! Settings file handling
//!
//! Precedence follows the usual hierarchy: CLI flags > environment
//! variables > settings file > built-in defaults. The CLI layer applies
//! flag and environment overrides (clap's `env` attribute); this module
//! owns the file and default layers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::model::DEFAULT_MAX_DURATION;

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV_VAR: &str = "SHORTSGEN_CONFIG";

/// Client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the shorts backend
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Default maximum clip length in seconds
    pub max_duration: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicitly named file must exist and parse; otherwise the first
    /// candidate path that exists is used, and built-in defaults apply when
    /// none does.
    pub fn load(explicit: Option<&Path>) -> DomainResult<Self> {
        if let Some(path) = explicit {
            info!("Loading settings from {}", path.display());
            return Self::from_file(path);
        }

        for path in Self::candidate_paths() {
            if path.exists() {
                info!("Loading settings from {}", path.display());
                return Self::from_file(&path);
            }
            debug!("No settings file at {}", path.display());
        }

        Ok(Self::default())
    }

    /// Parse a TOML settings file
    pub fn from_file(path: &Path) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            DomainError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Candidate settings paths, in precedence order
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(env_path));
        }

        paths.push(PathBuf::from("shortsgen.toml"));

        if let Some(home) = std::env::var_os("HOME") {
            paths.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("shortsgen")
                    .join("config.toml"),
            );
        }

        paths
    }
}
