//! Session cache of resolved documents

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::document::ResolvedDocument;

/// Memoizes resolved documents by absolute source path.
///
/// Handles are shared: every lookup of a path returns the same `Arc`.
///
/// Entries are never invalidated: a document edited on disk after it was
/// cached keeps its first resolution for the lifetime of the cache. Each
/// [`Resolver`](crate::resolver::Resolver) owns one, so independent sessions do
/// not share state.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: HashMap<PathBuf, Arc<ResolvedDocument>>,
}

impl ResolutionCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly resolved document, returning the shared handle.
    pub fn insert(&mut self, path: PathBuf, document: ResolvedDocument) -> Arc<ResolvedDocument> {
        let document = Arc::new(document);
        self.entries.insert(path, Arc::clone(&document));
        document
    }

    /// Get a previously resolved document
    pub fn get(&self, path: &Path) -> Option<Arc<ResolvedDocument>> {
        self.entries.get(path).cloned()
    }

    /// Get the number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
