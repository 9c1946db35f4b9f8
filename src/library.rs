//! # Rule Library Installation
//!
//! Installs a rule library into a local directory and registers that
//! directory as a configured search root.
//!
//! ## Design
//!
//! Transport is abstracted behind the [`LibrarySource`] trait so the manager
//! does not care whether a bundle arrives over git or from a local path:
//!
//! - **`GitLibrarySource`**: shallow-clones with the system `git` binary.
//! - **`LocalLibrarySource`**: copies a directory tree from the local disk.
//!
//! [`LibraryManager::install_library`] chooses a source from the shape of the
//! URI, fetches, and on success appends the absolute destination to the
//! persisted configuration's `rule_roots`. Tests swap in their own sources
//! with [`LibraryManager::with_sources`].
//!
//! ## Destinations
//!
//! Transports replace the destination wholesale. The manager only lets them
//! do so when the destination is missing, empty, or carries the
//! [`INSTALL_MARKER`] file written by an earlier install. Any other existing
//! directory is refused untouched.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;
use crate::git;
use crate::path::{absolutize, is_hidden};

/// File written into every installed library, recording its source URI.
pub const INSTALL_MARKER: &str = ".rulestitch-library";

/// Trait for library transports - allows mocking in tests
pub trait LibrarySource: Send + Sync {
    /// Populate `destination` with the contents of the library at `uri`.
    fn fetch(&self, uri: &str, destination: &Path) -> Result<()>;
}

/// Fetches libraries with `git clone --depth=1`
#[derive(Debug, Clone, Default)]
pub struct GitLibrarySource {
    /// Branch or tag to check out; the remote default branch when unset.
    pub r#ref: Option<String>,
}

impl LibrarySource for GitLibrarySource {
    fn fetch(&self, uri: &str, destination: &Path) -> Result<()> {
        git::clone_shallow(uri, self.r#ref.as_deref(), destination)?;
        let git_dir = destination.join(".git");
        if git_dir.is_dir() {
            fs::remove_dir_all(git_dir)?;
        }
        Ok(())
    }
}

/// Copies a library from a directory on the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLibrarySource;

impl LocalLibrarySource {
    /// Load every non-hidden file under `dir` into a `MemoryFS`, keyed by
    /// path relative to `dir`.
    fn load_directory(dir: &Path) -> Result<MemoryFS> {
        let mut staged = MemoryFS::new();
        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            entry.depth() == 0 || !entry.file_name().to_str().is_some_and(is_hidden)
        });
        for entry in walker {
            let entry = entry.map_err(|e| Error::Filesystem {
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| Error::Filesystem {
                    message: e.to_string(),
                })?;
            staged.add_file_content(relative, fs::read(entry.path())?)?;
        }
        Ok(staged)
    }
}

impl LibrarySource for LocalLibrarySource {
    fn fetch(&self, uri: &str, destination: &Path) -> Result<()> {
        let source_dir = Path::new(uri);
        if !source_dir.is_dir() {
            return Err(Error::Library {
                source_uri: uri.to_string(),
                message: "source directory not found".to_string(),
            });
        }
        let staged = Self::load_directory(source_dir)?;
        if staged.is_empty() {
            return Err(Error::Library {
                source_uri: uri.to_string(),
                message: "source directory contains no files".to_string(),
            });
        }
        if destination.exists() {
            fs::remove_dir_all(destination)?;
        }
        fs::create_dir_all(destination)?;
        staged.write_to_disk(destination)
    }
}

/// Installs libraries and registers them as search roots
pub struct LibraryManager {
    config_path: PathBuf,
    git_source: Box<dyn LibrarySource>,
    local_source: Box<dyn LibrarySource>,
}

impl LibraryManager {
    /// Creates a manager with the default git and local transports, writing
    /// registrations to the configuration file at `config_path`.
    pub fn new(config_path: PathBuf) -> Self {
        Self::with_git_ref(config_path, None)
    }

    /// Like [`LibraryManager::new`], cloning git libraries at `r#ref`.
    pub fn with_git_ref(config_path: PathBuf, r#ref: Option<String>) -> Self {
        Self {
            config_path,
            git_source: Box::new(GitLibrarySource { r#ref }),
            local_source: Box::new(LocalLibrarySource),
        }
    }

    /// Creates a manager with custom transports.
    pub fn with_sources(
        config_path: PathBuf,
        git_source: Box<dyn LibrarySource>,
        local_source: Box<dyn LibrarySource>,
    ) -> Self {
        Self {
            config_path,
            git_source,
            local_source,
        }
    }

    /// Fetch `source` into `destination` and register it as a configured root.
    ///
    /// Returns `false` (and logs why) when either the fetch or the
    /// registration fails.
    pub fn install_library(&self, source: &str, destination: &Path) -> bool {
        match self.try_install(source, destination) {
            Ok(added) => {
                if added {
                    info!(
                        "Installed {} and registered {} as a rule root",
                        source,
                        destination.display()
                    );
                } else {
                    info!(
                        "Installed {} into already registered root {}",
                        source,
                        destination.display()
                    );
                }
                true
            }
            Err(e) => {
                warn!("Failed to install library {}: {}", source, e);
                false
            }
        }
    }

    /// Fetch and register, returning whether the root was newly added.
    pub fn try_install(&self, source: &str, destination: &Path) -> Result<bool> {
        let destination = absolutize(destination);
        ensure_replaceable(source, &destination)?;

        let transport = if git::is_git_uri(source) {
            &self.git_source
        } else {
            &self.local_source
        };
        transport.fetch(source, &destination)?;
        fs::write(destination.join(INSTALL_MARKER), source)?;
        self.register_root(&destination)
    }

    /// Append `root` to the persisted configuration's `rule_roots`.
    ///
    /// Relative paths are made absolute against the current directory first.
    pub fn register_root(&self, root: &Path) -> Result<bool> {
        let mut config: Config = config::from_file(&self.config_path)?;
        let added = config.add_root(absolutize(root));
        if added {
            config.save(&self.config_path)?;
        }
        Ok(added)
    }
}

/// Fail unless `destination` is missing, empty, or a previous install.
fn ensure_replaceable(source: &str, destination: &Path) -> Result<()> {
    if !destination.exists() {
        return Ok(());
    }
    let refuse = |message: String| Error::Library {
        source_uri: source.to_string(),
        message,
    };
    if !destination.is_dir() {
        return Err(refuse(format!(
            "destination {} is not a directory",
            destination.display()
        )));
    }
    if destination.join(INSTALL_MARKER).is_file() || fs::read_dir(destination)?.next().is_none() {
        return Ok(());
    }
    Err(refuse(format!(
        "destination {} is not empty and was not created by a previous install",
        destination.display()
    )))
}
