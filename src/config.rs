//! # Persisted Configuration
//!
//! This module defines the on-disk configuration document that lists the
//! user's extra rule directories. The file is YAML:
//!
//! ```yaml
//! rule_roots:
//!   - ~/work/team-rules
//!   - /opt/company/policies
//! exclude:
//!   - "drafts/**"
//! ```
//!
//! - **`rule_roots`**: directories registered as `ConfigFile` search roots, in
//!   the order they appear. Earlier entries get lower precedence. A leading
//!   `~` is expanded to the user's home directory.
//! - **`exclude`**: glob patterns (relative to each root) for files the
//!   validator should skip.
//!
//! A missing file is an empty configuration. A malformed one is also treated as
//! empty by [`load_or_default`], with a warning logged, so root computation can
//! still fall back to the default directory and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The persisted rulestitch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extra rule directories, lowest precedence first.
    #[serde(default)]
    pub rule_roots: Vec<PathBuf>,
    /// Glob patterns for files the validator skips.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Config {
    /// Register a directory as a configured root.
    ///
    /// Returns `false` if the path was already listed.
    pub fn add_root<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        if self.rule_roots.iter().any(|existing| existing == path) {
            return false;
        }
        self.rule_roots.push(path.to_path_buf());
        true
    }

    /// Compile the `exclude` globs.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.exclude
            .iter()
            .map(|p| Pattern::new(p).map_err(Error::Glob))
            .collect()
    }

    /// Serialize the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }
        fs::write(path, yaml).map_err(|e| Error::ConfigWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a configuration document from a YAML string.
///
/// Blank documents (or documents holding only comments) parse as the empty
/// configuration.
pub fn parse(yaml: &str) -> Result<Config> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    if value.is_null() {
        return Ok(Config::default());
    }
    let mut config: Config = serde_yaml::from_value(value).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("Expected 'rule_roots:' followed by a list of directories".to_string()),
    })?;
    config.rule_roots = config.rule_roots.into_iter().map(expand_home).collect();
    Ok(config)
}

/// Replace a leading `~` component with the home directory.
fn expand_home(path: PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path,
    }
}

/// Load a configuration file, failing on I/O or parse errors.
///
/// A file that does not exist yields the empty configuration.
pub fn from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Load a configuration file, treating any failure as an empty configuration.
pub fn load_or_default(path: &Path) -> Config {
    match from_file(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "Ignoring malformed configuration {}: {}",
                path.display(),
                e
            );
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_rule_roots_in_order() {
        let config = parse("rule_roots:\n  - /a\n  - /b\n").unwrap();
        assert_eq!(
            config.rule_roots,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_parse_blank_and_comment_only() {
        assert_eq!(parse("").unwrap(), Config::default());
        assert_eq!(parse("# nothing here\n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_wrong_shape_has_hint() {
        let err = parse("rule_roots: 42\n").unwrap_err();
        let display = err.to_string();
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_from_file_missing_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = from_file(&temp.path().join("absent.yaml")).unwrap();
        assert!(config.rule_roots.is_empty());
    }

    #[test]
    fn test_load_or_default_logs_warning_on_malformed() {
        testing_logger::setup();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "rule_roots: [unclosed").unwrap();

        let config = load_or_default(&path);
        assert_eq!(config, Config::default());

        testing_logger::validate(|captured_logs| {
            assert!(captured_logs.iter().any(|entry| entry.level == log::Level::Warn
                && entry.body.contains("Ignoring malformed configuration")));
        });
    }

    #[test]
    fn test_parse_expands_home_directory() {
        let config = parse("rule_roots:\n  - ~/work/team-rules\n  - /opt/policies\n  - ~other/rules\n").unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.rule_roots[0], home.join("work/team-rules"));
        }
        assert_eq!(config.rule_roots[1], PathBuf::from("/opt/policies"));
        assert_eq!(config.rule_roots[2], PathBuf::from("~other/rules"));
    }

    #[test]
    fn test_add_root_is_idempotent() {
        let mut config = Config::default();
        assert!(config.add_root("/rules/team"));
        assert!(!config.add_root("/rules/team"));
        assert_eq!(config.rule_roots.len(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.add_root("/rules/one");
        config.exclude.push("drafts/**".to_string());
        config.save(&path).unwrap();

        let loaded = from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_exclude_patterns_invalid_glob() {
        let config = Config {
            rule_roots: vec![],
            exclude: vec!["[broken".to_string()],
        };
        assert!(matches!(config.exclude_patterns(), Err(Error::Glob(_))));
    }
}
