//! Document sources: the real filesystem and an in-memory stand-in
//!
//! The resolver never touches `std::fs` directly. It goes through the
//! [`DocumentSource`] trait so that the same engine can run against a disk
//! tree ([`DiskSource`]) or a staged set of files ([`MemoryFS`]), which tests
//! and dry runs use to avoid touching the host filesystem.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::{is_hidden, normalize};

/// Read-only access to rule documents
pub trait DocumentSource: Send + Sync {
    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a document as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// The identity of a document: two paths naming the same file map to the
    /// same value. `path` is absolute.
    fn canonical(&self, path: &Path) -> PathBuf;

    /// Every regular file under `root`, recursively, in a stable order.
    ///
    /// Hidden files and directories are skipped. A missing root yields an
    /// empty list.
    fn list_files(&self, root: &Path) -> Vec<PathBuf>;
}

/// The host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSource;

impl DocumentSource for DiskSource {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Follows symlinks; paths that cannot be resolved stay lexical.
    fn canonical(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| normalize(path))
    }

    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            return Vec::new();
        }
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_name().to_str().is_some_and(is_hidden)
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }
}

/// Represents a staged file
#[derive(Debug, Clone)]
pub struct File {
    /// File content as bytes
    pub content: Vec<u8>,
}

impl File {
    /// Create a new file with content
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    /// Create a new file from string content
    pub fn from_string(content: &str) -> Self {
        Self::new(content.as_bytes().to_vec())
    }

    /// Get file size in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// In-memory filesystem keyed by normalized path
#[derive(Debug, Clone, Default)]
pub struct MemoryFS {
    files: BTreeMap<PathBuf, File>,
}

impl MemoryFS {
    /// Create a new empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a file
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, file: File) -> Result<()> {
        let path = normalize(path.as_ref());
        if path.as_os_str().is_empty() || path == Path::new(".") {
            return Err(Error::Filesystem {
                message: "Cannot add a file with an empty path".to_string(),
            });
        }
        self.files.insert(path, file);
        Ok(())
    }

    /// Add a file with string content
    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) -> Result<()> {
        self.add_file(path, File::from_string(content))
    }

    /// Add a file with raw byte content
    pub fn add_file_content<P: AsRef<Path>>(&mut self, path: P, content: Vec<u8>) -> Result<()> {
        self.add_file(path, File::new(content))
    }

    /// Get a file by path
    pub fn get_file<P: AsRef<Path>>(&self, path: P) -> Option<&File> {
        self.files.get(&normalize(path.as_ref()))
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(&normalize(path.as_ref()))
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if filesystem is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file under `target_dir`, creating directories as needed.
    ///
    /// Absolute paths are re-rooted under `target_dir`.
    pub fn write_to_disk(&self, target_dir: &Path) -> Result<()> {
        for (path, file) in &self.files {
            let relative: PathBuf = path
                .components()
                .filter(|c| matches!(c, std::path::Component::Normal(_)))
                .collect();
            let full_path = target_dir.join(relative);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&full_path, &file.content)?;
        }
        Ok(())
    }
}

impl DocumentSource for MemoryFS {
    fn is_file(&self, path: &Path) -> bool {
        self.exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let file = self.get_file(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        String::from_utf8(file.content.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn canonical(&self, path: &Path) -> PathBuf {
        normalize(path)
    }

    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        let root = normalize(root);
        self.files
            .keys()
            .filter(|path| path.starts_with(&root))
            .filter(|path| {
                path.strip_prefix(&root)
                    .map(|rel| {
                        !rel.iter()
                            .any(|part| part.to_str().is_some_and(is_hidden))
                    })
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}
