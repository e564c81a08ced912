//! TOML configuration for the command-line front end.
//!
//! Read from `~/.lottogen/config.toml` unless a path is given. Every key is
//! optional; a missing file means built-in defaults.
//!
//! ```toml
//! db_dir = "/srv/lottery-db"
//! default_format = "THUNDERBALL"
//! default_lines = 5
//! ```

use crate::home_dir;
use crate::rules::LotteryFormat;
use crate::{line_count_in_range, DEFAULT_LINES};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides `<home>/lottery-db`.
    pub db_dir: Option<PathBuf>,
    pub default_format: Option<String>,
    pub default_lines: Option<u32>,
}

impl Config {
    /// Load and validate `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Config> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading config {}", path.display()))
            }
        };
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.default_format {
            name.parse::<LotteryFormat>()?;
        }
        if let Some(n) = self.default_lines {
            if !line_count_in_range(n) {
                bail!(
                    "default_lines must be between {} and {}, got {}",
                    crate::MIN_LINES,
                    crate::MAX_LINES,
                    n
                );
            }
        }
        Ok(())
    }

    pub fn format(&self) -> LotteryFormat {
        self.default_format
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> u32 {
        self.default_lines.unwrap_or(DEFAULT_LINES)
    }
}

/// `~/.lottogen/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".lottogen").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format(), LotteryFormat::EuroMillions);
        assert_eq!(config.lines(), DEFAULT_LINES);
    }

    #[test]
    fn parses_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "db_dir = \"/srv/lottery-db\"\ndefault_format = \"thunderball\"\ndefault_lines = 5\n",
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.db_dir, Some(PathBuf::from("/srv/lottery-db")));
        assert_eq!(config.format(), LotteryFormat::Thunderball);
        assert_eq!(config.lines(), 5);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_format = \"KENO\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("KENO"), "{}", err);
    }

    #[test]
    fn out_of_range_lines_are_rejected() {
        let config = Config {
            default_lines: Some(100),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "colour = \"blue\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
