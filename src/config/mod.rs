//! Configuration loading.
//!
//! Loads `rejoinder.toml` from `$REJOINDER_CONFIG_PATH`, the working
//! directory, or the per-user config directory, in that order. Environment
//! variables override file values; file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::compose::Letterhead;

/// Config file name looked up in the working and per-user directories.
pub const CONFIG_FILE_NAME: &str = "rejoinder.toml";

// ── Top-level config ────────────────────────────────────────────

/// Top-level configuration loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RejoinderConfig {
    /// Recipient lines and greeting printed in every letter.
    pub letterhead: Letterhead,
    /// Log filter and optional log file directory.
    pub logging: LoggingConfig,
}

impl RejoinderConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// If no config file exists, returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let mut config = Self::load_from(config_path_with(env, config_dir().ok()))?;
        config.apply_overrides(env);
        Ok(config)
    }

    /// Load from a TOML file only, no env overrides. A missing file yields
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config from file");
                Self::from_toml(&contents)
                    .with_context(|| format!("invalid config file {}", path.display()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "failed to read config file {}: {e}",
                path.display()
            )),
        }
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function so tests need not touch the process
    /// environment.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("REJOINDER_RECIPIENT") {
            let lines: Vec<String> = v
                .split(['\n', ';'])
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect();
            if lines.is_empty() {
                tracing::warn!(
                    var = "REJOINDER_RECIPIENT",
                    "ignoring blank env override"
                );
            } else {
                self.letterhead.recipient_lines = lines;
            }
        }
        if let Some(v) = env("REJOINDER_GREETING") {
            if v.trim().is_empty() {
                tracing::warn!(var = "REJOINDER_GREETING", "ignoring blank env override");
            } else {
                self.letterhead.greeting = v.trim().to_owned();
            }
        }
        if let Some(v) = env("REJOINDER_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = env("REJOINDER_LOG_DIR") {
            self.logging.dir = Some(PathBuf::from(v)).filter(|p| !p.as_os_str().is_empty());
        }
    }

    /// Parse a TOML string into config.
    ///
    /// # Errors
    ///
    /// Returns an error when the TOML is malformed or has the wrong shape.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: RejoinderConfig =
            toml::from_str(toml_str).context("failed to parse config TOML")?;
        Ok(config)
    }
}

// ── Logging config ──────────────────────────────────────────────

/// Logging settings (`[logging]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for daily-rotated JSON log files. Console only when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}

// ── Paths ───────────────────────────────────────────────────────

/// Per-user configuration directory (`~/.rejoinder`).
///
/// # Errors
///
/// Returns an error when the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".rejoinder"))
}

/// Resolve the config file path.
///
/// `$REJOINDER_CONFIG_PATH` wins; otherwise `./rejoinder.toml` when it
/// exists; otherwise the file in `user_dir`, falling back to the working
/// directory when there is no user directory.
pub fn config_path_with(
    env: impl Fn(&str) -> Option<String>,
    user_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(p) = env("REJOINDER_CONFIG_PATH").filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(p);
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    user_dir.map_or(local, |dir| dir.join(CONFIG_FILE_NAME))
}

// ── Tests ───────────────────────────────────────────────────────
