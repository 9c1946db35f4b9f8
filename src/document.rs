//! Resolved document model

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::directive::IncludeDirective;

/// Document format, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentFormat {
    Markdown,
    YamlLike,
    Json,
    MdcRule,
    PlainText,
}

impl DocumentFormat {
    /// Map a path's extension to a format; unknown extensions are plain text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("md") => DocumentFormat::Markdown,
            Some("mdc") => DocumentFormat::MdcRule,
            Some("yaml") | Some("yml") => DocumentFormat::YamlLike,
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::PlainText,
        }
    }

    /// Whether the validator treats files of this format as rule documents.
    pub fn is_recognized(self) -> bool {
        self != DocumentFormat::PlainText
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Markdown => "markdown",
            DocumentFormat::YamlLike => "yaml",
            DocumentFormat::Json => "json",
            DocumentFormat::MdcRule => "mdc",
            DocumentFormat::PlainText => "text",
        };
        f.write_str(name)
    }
}

/// Per-document resolution diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// `<file>:<line> ...` messages for includes that could not be expanded.
    pub errors: Vec<String>,
    /// Malformed directive lines, left in the body as plain text.
    pub warnings: Vec<String>,
    /// Character count of the raw document.
    pub original_size: usize,
    /// Character count of the flattened body.
    pub resolved_size: usize,
    pub directive_count: usize,
}

/// A fully flattened source document
///
/// Once produced it is held unchanged in the resolver's cache for the rest of
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDocument {
    pub source_path: PathBuf,
    pub format: DocumentFormat,
    pub body: String,
    pub directives: Vec<IncludeDirective>,
    pub diagnostics: Diagnostics,
}

impl ResolvedDocument {
    /// Number of directives that were expanded.
    pub fn resolved_count(&self) -> usize {
        self.directives.iter().filter(|d| d.is_resolved()).count()
    }

    /// Number of directives left unexpanded.
    pub fn unresolved_count(&self) -> usize {
        self.directives.len() - self.resolved_count()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.errors.is_empty()
    }
}
