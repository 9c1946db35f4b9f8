//! # Root Registry
//!
//! Computes the ordered list of directories searched for include targets.
//! Roots come from three places, each with its own precedence band:
//!
//! | Origin | Precedence |
//! | --- | --- |
//! | built-in default directory | `0` |
//! | persisted configuration, in listed order | `10, 11, ...` |
//! | environment variable, in listed order | `20, 21, ...` |
//!
//! [`compute_roots`] returns them sorted by ascending precedence. Resolution
//! walks them in the opposite direction: the highest precedence root is tried
//! first, so a later, more specific root overrides a file of the same name in
//! an earlier one.
//!
//! Root computation performs no I/O. A configured directory that does not
//! exist is still returned; it simply never matches anything.

use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::directive::Scope;

/// Precedence of the built-in default root.
pub const DEFAULT_PRECEDENCE: i32 = 0;
/// First precedence value handed to configured roots.
pub const CONFIG_PRECEDENCE_BASE: i32 = 10;
/// First precedence value handed to environment roots.
pub const ENV_PRECEDENCE_BASE: i32 = 20;

/// Where a root was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootOrigin {
    Default,
    ConfigFile,
    Environment,
}

impl fmt::Display for RootOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RootOrigin::Default => "default",
            RootOrigin::ConfigFile => "config",
            RootOrigin::Environment => "environment",
        };
        f.write_str(name)
    }
}

/// A directory searched for include targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Root {
    pub path: PathBuf,
    pub origin: RootOrigin,
    pub precedence: i32,
}

impl Root {
    pub fn new<P: Into<PathBuf>>(path: P, origin: RootOrigin, precedence: i32) -> Self {
        Self {
            path: path.into(),
            origin,
            precedence,
        }
    }

    /// Whether a directive with the given scope may match under this root.
    pub fn accepts(&self, scope: Scope) -> bool {
        match scope {
            Scope::AllRoots => true,
            Scope::ExtraRootsOnly => self.origin != RootOrigin::Default,
        }
    }
}

/// Build the root list from the three configuration sources.
///
/// The result is sorted by ascending precedence.
pub fn compute_roots<P, Q>(configured: &[P], env_paths: &[Q], default_path: &Path) -> Vec<Root>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut roots = Vec::with_capacity(1 + configured.len() + env_paths.len());
    roots.push(Root::new(default_path, RootOrigin::Default, DEFAULT_PRECEDENCE));

    for (offset, path) in configured.iter().enumerate() {
        roots.push(Root::new(
            path.as_ref(),
            RootOrigin::ConfigFile,
            CONFIG_PRECEDENCE_BASE + offset as i32,
        ));
    }

    for (offset, path) in env_paths.iter().enumerate() {
        roots.push(Root::new(
            path.as_ref(),
            RootOrigin::Environment,
            ENV_PRECEDENCE_BASE + offset as i32,
        ));
    }

    roots.sort_by_key(|root| root.precedence);
    roots
}

/// Split a path-list value (like `PATH`) into its entries, dropping empties.
pub fn split_env_paths(value: &OsStr) -> Vec<PathBuf> {
    env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Read and split the named environment variable; unset yields no entries.
pub fn env_paths(var: &str) -> Vec<PathBuf> {
    env::var_os(var)
        .map(|value| split_env_paths(&value))
        .unwrap_or_default()
}

/// Roots eligible for `scope`, most specific (highest precedence) first.
pub fn search_order(roots: &[Root], scope: Scope) -> Vec<&Root> {
    let mut eligible: Vec<&Root> = roots.iter().filter(|root| root.accepts(scope)).collect();
    eligible.sort_by(|a, b| b.precedence.cmp(&a.precedence));
    eligible
}
