//! Shared test utilities for CLI end-to-end tests.
//!
//! Every fixture is a temporary directory laid out as:
//!
//! ```text
//! <tmp>/config.yaml   persisted configuration (rule_roots)
//! <tmp>/default/      built-in default root
//! <tmp>/work/         documents being resolved
//! ```
//!
//! Commands created through [`TestFixture::command`] point `--config` and
//! `--default-root` at the fixture and clear the rulestitch environment
//! variables, so the host's own configuration never leaks into a test.
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_file("work/a.md", "@include b.md");
//! fixture.command().arg("resolve").arg(fixture.path().join("work/a.md"));
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temporary rule workspace with its own config file and default root.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with an empty default root.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("default")
            .create_dir_all()
            .expect("Failed to create default root");
        Self { temp_dir }
    }

    /// Write the persisted configuration with the given extra roots,
    /// relative to the fixture directory.
    pub fn with_roots(self, roots: &[&str]) -> Self {
        let mut yaml = String::from("rule_roots:\n");
        for root in roots {
            yaml.push_str(&format!("  - {}\n", self.path().join(root).display()));
        }
        self.with_config(&yaml)
    }

    /// Write the persisted configuration verbatim.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("config.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path (relative to the fixture) and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a fixture-relative file.
    pub fn file(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    /// Get the path to the default root.
    pub fn default_root(&self) -> PathBuf {
        self.temp_dir.path().join("default")
    }

    /// Create an isolated `rulestitch` command for this fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rulestitch");
        cmd.current_dir(self.path())
            .env_remove("RULESTITCH_PATH")
            .env_remove("RULESTITCH_CONFIG")
            .env_remove("RULESTITCH_DEFAULT_ROOT")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("--config")
            .arg(self.config_path())
            .arg("--default-root")
            .arg(self.default_root());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
