//! Optional TOML configuration for the `overlap` CLI.
//!
//! ```toml
//! store = "/var/lib/overlap/schedules"
//! policy = "drop"
//! ```
//!
//! Command-line flags and environment variables win over the file; the file
//! wins over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use overlap_engine::MissingDayPolicy;
use serde::Deserialize;

/// Store directory used when neither flag, env var, nor config names one.
pub const DEFAULT_STORE_DIR: &str = "schedules";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding one `<participant>.json` per participant.
    pub store: Option<PathBuf>,
    /// Missing-day policy for `intersect` and `common`.
    pub policy: Option<MissingDayPolicy>,
}

impl Config {
    /// Load the config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn store_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.store.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
    }

    pub fn policy(&self, flag: Option<MissingDayPolicy>) -> MissingDayPolicy {
        flag.or(self.policy).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let config: Config = toml::from_str("store = \"/data\"\npolicy = \"carry\"").unwrap();
        assert_eq!(config.store_dir(None), PathBuf::from("/data"));
        assert_eq!(config.store_dir(Some("/flag".into())), PathBuf::from("/flag"));
        assert_eq!(config.policy(None), MissingDayPolicy::Carry);
        assert_eq!(config.policy(Some(MissingDayPolicy::Drop)), MissingDayPolicy::Drop);
    }

    #[test]
    fn defaults_apply_without_file() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.store_dir(None), PathBuf::from(DEFAULT_STORE_DIR));
        assert_eq!(config.policy(None), MissingDayPolicy::Drop);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("stroe = \"/typo\"").is_err());
    }
}
