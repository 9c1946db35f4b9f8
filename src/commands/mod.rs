//! # CLI Command Implementations
//!
//! Each subcommand of the `rulestitch` tool lives in its own file with:
//! - An `Args` struct deriving `clap::Args`.
//! - An `execute` function taking the parsed args and the shared [`Context`].
//!
//! The commands only orchestrate; resolution, validation and installation are
//! done by the `rulestitch` library.

pub mod completions;
pub mod install;
pub mod resolve;
pub mod roots;
pub mod tree;
pub mod validate;

use std::path::PathBuf;

use rulestitch::config::{self, Config};
use rulestitch::defaults::{default_config_path, default_rules_root, ROOTS_ENV_VAR};
use rulestitch::output::OutputConfig;
use rulestitch::resolver::Resolver;
use rulestitch::roots::{compute_roots, env_paths, Root};

/// Settings shared by every command, taken from the global flags
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub default_root: PathBuf,
    pub output: OutputConfig,
}

impl Context {
    pub fn new(config: Option<PathBuf>, default_root: Option<PathBuf>, color_flag: &str) -> Self {
        Self {
            config_path: config.unwrap_or_else(default_config_path),
            default_root: default_root.unwrap_or_else(default_rules_root),
            output: OutputConfig::from_env_and_flag(color_flag),
        }
    }

    /// Load the persisted configuration; a malformed file is treated as empty.
    pub fn load_config(&self) -> Config {
        config::load_or_default(&self.config_path)
    }

    /// Compute the root list from the default root, the configuration and
    /// the environment.
    pub fn roots(&self, config: &Config) -> Vec<Root> {
        compute_roots(
            &config.rule_roots,
            &env_paths(ROOTS_ENV_VAR),
            &self.default_root,
        )
    }

    /// Start a fresh resolution session on the host filesystem.
    pub fn resolver(&self) -> (Config, Resolver) {
        let config = self.load_config();
        let roots = self.roots(&config);
        (config, Resolver::new(roots))
    }
}
