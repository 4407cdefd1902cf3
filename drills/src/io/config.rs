//! Drill parameters stored in `drills.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "drills.toml";

/// Drill configuration (TOML).
///
/// Missing fields default to the classic exercise values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DrillsConfig {
    pub smallest: SmallestConfig,
    pub unique: UniqueConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SmallestConfig {
    /// Minimum number of comma-separated tokens a list must have.
    pub min_count: usize,

    /// How many of the smallest values to report.
    pub k: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UniqueConfig {
    /// How many distinct numbers the unique drill collects.
    pub count: usize,
}

impl Default for SmallestConfig {
    fn default() -> Self {
        Self { min_count: 5, k: 3 }
    }
}

impl Default for UniqueConfig {
    fn default() -> Self {
        Self { count: 5 }
    }
}

impl DrillsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.smallest.min_count == 0 {
            return Err(anyhow!("smallest.min_count must be > 0"));
        }
        if self.smallest.k == 0 {
            return Err(anyhow!("smallest.k must be > 0"));
        }
        if self.smallest.k > self.smallest.min_count {
            return Err(anyhow!(
                "smallest.k ({}) must not exceed smallest.min_count ({})",
                self.smallest.k,
                self.smallest.min_count
            ));
        }
        if self.unique.count == 0 {
            return Err(anyhow!("unique.count must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DrillsConfig::default()`.
pub fn load_config(path: &Path) -> Result<DrillsConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DrillsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DrillsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Result of [`init_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInit {
    /// The config file was (re)written.
    Written,
    /// A config file already existed and `force` was not set.
    Kept,
}

/// Write `cfg` to `path` unless a file is already there.
///
/// With `force`, an existing file is replaced.
pub fn init_config(path: &Path, cfg: &DrillsConfig, force: bool) -> Result<ConfigInit> {
    if path.exists() && !force {
        debug!(path = %path.display(), "config exists, keeping it");
        return Ok(ConfigInit::Kept);
    }
    write_config(path, cfg)?;
    info!(path = %path.display(), "config written");
    Ok(ConfigInit::Written)
}

/// Serialize a validated config and swap it into place.
pub fn write_config(path: &Path, cfg: &DrillsConfig) -> Result<()> {
    cfg.validate()?;
    let mut toml_text = toml::to_string_pretty(cfg).context("serialize drill config")?;
    toml_text.push('\n');

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    // Rename is atomic on the same filesystem; a crash leaves the old file intact.
    let staged = path.with_extension("toml.partial");
    fs::write(&staged, toml_text).with_context(|| format!("write {}", staged.display()))?;
    fs::rename(&staged, path)
        .with_context(|| format!("move {} to {}", staged.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DrillsConfig::default());
        assert_eq!(cfg.smallest.min_count, 5);
        assert_eq!(cfg.smallest.k, 3);
        assert_eq!(cfg.unique.count, 5);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("drills.toml");
        let mut cfg = DrillsConfig::default();
        cfg.smallest.min_count = 7;
        cfg.unique.count = 2;
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn init_keeps_existing_file_unless_forced() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drills.toml");
        fs::write(&path, "[unique]\ncount = 4\n").expect("write");

        let outcome = init_config(&path, &DrillsConfig::default(), false).expect("init");
        assert_eq!(outcome, ConfigInit::Kept);
        assert_eq!(load_config(&path).expect("load").unique.count, 4);

        let outcome = init_config(&path, &DrillsConfig::default(), true).expect("init");
        assert_eq!(outcome, ConfigInit::Written);
        assert_eq!(load_config(&path).expect("load"), DrillsConfig::default());
        assert!(!path.with_extension("toml.partial").exists());
    }

    #[test]
    fn init_refuses_invalid_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drills.toml");
        let mut cfg = DrillsConfig::default();
        cfg.smallest.k = 9;
        assert!(init_config(&path, &cfg, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drills.toml");
        fs::write(&path, "[smallest]\nk = 2\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.smallest.k, 2);
        assert_eq!(cfg.smallest.min_count, 5);
        assert_eq!(cfg.unique, UniqueConfig::default());
    }

    #[test]
    fn k_above_min_count_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drills.toml");
        fs::write(&path, "[smallest]\nmin_count = 2\nk = 3\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("must not exceed"));
    }

    #[test]
    fn zero_values_are_rejected() {
        let mut cfg = DrillsConfig::default();
        cfg.unique.count = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = DrillsConfig::default();
        cfg.smallest.k = 0;
        assert!(cfg.validate().is_err());
    }
}
