//! # Include Resolution
//!
//! The [`Resolver`] turns a source document into a [`ResolvedDocument`] by
//! expanding every `@include` directive it contains, recursively.
//!
//! ## Search order
//!
//! For each directive the resolver tries, in order:
//!
//! 1.  The requesting document's own directory. This is always eligible,
//!     whatever the directive's scope.
//! 2.  The registered roots permitted by the scope, highest precedence first.
//!     `%`-scoped directives never look in the built-in default root.
//!
//! Absolute targets skip the search and are used as-is if they exist.
//!
//! ## Splicing
//!
//! A found target replaces its directive line with a provenance block:
//!
//! ```text
//! # Included from: shared/base.md
//! <flattened body of shared/base.md>
//! # End include: shared/base.md
//! ```
//!
//! A missing target leaves the directive line untouched and records
//! `<file>:<line> include not found: <target> (scope: <scope>)`.
//!
//! ## Session state
//!
//! A resolver owns its [`ResolutionCache`] and the stack of documents
//! currently being expanded, both keyed by the source's canonical path so a
//! file reached through a symlink is still the same document. Each document
//! is read and flattened at most once per resolver. A target already on the stack is reported as a circular
//! include instead of being expanded again, so resolution always terminates.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use crate::cache::ResolutionCache;
use crate::directive::{self, IncludeDirective};
use crate::document::{Diagnostics, DocumentFormat, ResolvedDocument};
use crate::filesystem::{DiskSource, DocumentSource};
use crate::path::{absolutize, join_target};
use crate::roots::{search_order, Root};

/// Marker line opening a spliced include.
pub fn begin_marker(target: &str) -> String {
    format!("# Included from: {}", target)
}

/// Marker line closing a spliced include.
pub fn end_marker(target: &str) -> String {
    format!("# End include: {}", target)
}

/// A node of a document's include tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeNode {
    /// The directive target as written, or the document path for the root.
    pub label: String,
    /// Resolved file, if any.
    pub path: Option<PathBuf>,
    pub children: Vec<IncludeNode>,
}

/// A resolution session over a fixed set of roots
pub struct Resolver {
    roots: Vec<Root>,
    source: Box<dyn DocumentSource>,
    cache: ResolutionCache,
    in_progress: Vec<PathBuf>,
}

impl Resolver {
    /// Creates a resolver reading documents from the host filesystem.
    pub fn new(roots: Vec<Root>) -> Self {
        Self::with_source(roots, Box::new(DiskSource))
    }

    /// Creates a resolver over a custom [`DocumentSource`].
    pub fn with_source(roots: Vec<Root>, source: Box<dyn DocumentSource>) -> Self {
        Self {
            roots,
            source,
            cache: ResolutionCache::new(),
            in_progress: Vec::new(),
        }
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    pub fn source(&self) -> &dyn DocumentSource {
        self.source.as_ref()
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolve a document, serving it from the session cache when possible.
    ///
    /// Never fails: unreadable documents come back with a diagnostic body.
    pub fn resolve<P: AsRef<Path>>(&mut self, path: P) -> Arc<ResolvedDocument> {
        let key = self.source.canonical(&absolutize(path.as_ref()));
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }
        let document = self.resolve_uncached(&key);
        self.cache.insert(key, document)
    }

    /// Find the file a directive refers to, without resolving it.
    pub fn locate(&self, directive: &IncludeDirective, requesting_dir: &Path) -> Option<PathBuf> {
        let target = directive.target_path.as_str();
        if Path::new(target).is_absolute() {
            let candidate = join_target(requesting_dir, target);
            return self.source.is_file(&candidate).then_some(candidate);
        }

        let local = join_target(requesting_dir, target);
        if self.source.is_file(&local) {
            debug!("{} found next to requesting document", target);
            return Some(local);
        }

        for root in search_order(&self.roots, directive.scope) {
            let candidate = join_target(&absolutize(&root.path), target);
            if self.source.is_file(&candidate) {
                debug!(
                    "{} found in {} root {} (precedence {})",
                    target,
                    root.origin,
                    root.path.display(),
                    root.precedence
                );
                return Some(candidate);
            }
        }
        None
    }

    /// Build the include tree of a document.
    pub fn include_tree<P: AsRef<Path>>(&mut self, path: P) -> IncludeNode {
        let document = self.resolve(path);
        let label = document.source_path.display().to_string();
        self.tree_node(label, &document)
    }

    fn tree_node(&mut self, label: String, document: &ResolvedDocument) -> IncludeNode {
        let children = document
            .directives
            .iter()
            .map(|directive| match &directive.resolved_path {
                Some(path) => {
                    let child = self.resolve(path);
                    self.tree_node(directive.target_path.clone(), &child)
                }
                None => IncludeNode {
                    label: format!("{} (unresolved)", directive.target_path),
                    path: None,
                    children: Vec::new(),
                },
            })
            .collect();
        IncludeNode {
            label,
            path: Some(document.source_path.clone()),
            children,
        }
    }

    fn resolve_uncached(&mut self, path: &Path) -> ResolvedDocument {
        let format = DocumentFormat::from_path(path);
        let content = match self.source.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                let message = format!("{}: unable to read document: {}", path.display(), e);
                warn!("{}", message);
                let body = format!("# rulestitch: {}", message);
                return ResolvedDocument {
                    source_path: path.to_path_buf(),
                    format,
                    diagnostics: Diagnostics {
                        errors: vec![message],
                        warnings: Vec::new(),
                        original_size: 0,
                        resolved_size: body.chars().count(),
                        directive_count: 0,
                    },
                    body,
                    directives: Vec::new(),
                };
            }
        };

        let parsed = directive::scan(&content);
        let mut directives = parsed.directives;
        let mut diagnostics = Diagnostics {
            original_size: content.chars().count(),
            directive_count: directives.len(),
            warnings: parsed
                .warnings
                .iter()
                .map(|w| {
                    format!(
                        "{}:{} malformed include directive: {}",
                        path.display(),
                        w.source_line,
                        w.text
                    )
                })
                .collect(),
            ..Diagnostics::default()
        };

        if directives.is_empty() {
            diagnostics.resolved_size = diagnostics.original_size;
            return ResolvedDocument {
                source_path: path.to_path_buf(),
                format,
                body: content,
                directives,
                diagnostics,
            };
        }

        let requesting_dir = path.parent().unwrap_or(Path::new("/")).to_path_buf();
        self.in_progress.push(path.to_path_buf());

        for directive in directives.iter_mut() {
            let Some(found) = self.locate(directive, &requesting_dir) else {
                diagnostics.errors.push(format!(
                    "{}:{} include not found: {} (scope: {})",
                    path.display(),
                    directive.source_line,
                    directive.target_path,
                    directive.scope
                ));
                continue;
            };

            let identity = self.source.canonical(&found);
            if let Some(start) = self.in_progress.iter().position(|p| p == &identity) {
                let chain = self.in_progress[start..]
                    .iter()
                    .chain(std::iter::once(&identity))
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                warn!("Circular include in {}: {}", path.display(), chain);
                diagnostics.errors.push(format!(
                    "{}:{} circular include detected: {} ({})",
                    path.display(),
                    directive.source_line,
                    directive.target_path,
                    chain
                ));
                continue;
            }

            let included = self.resolve(&found);
            directive.resolved_body = Some(included.body.clone());
            directive.resolved_path = Some(included.source_path.clone());
        }

        self.in_progress.pop();

        let body = splice(&content, &directives);
        diagnostics.resolved_size = body.chars().count();
        ResolvedDocument {
            source_path: path.to_path_buf(),
            format,
            body,
            directives,
            diagnostics,
        }
    }
}

/// Replace every resolved directive line with its wrapped body.
///
/// Line terminators of the original content are preserved.
fn splice(content: &str, directives: &[IncludeDirective]) -> String {
    let mut resolved = directives
        .iter()
        .filter_map(|d| d.resolved_body.as_deref().map(|body| (d.source_line, d, body)))
        .peekable();
    if resolved.peek().is_none() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    for (index, line) in content.split_inclusive('\n').enumerate() {
        let Some((_, directive, body)) =
            resolved.next_if(|(source_line, _, _)| *source_line == index + 1)
        else {
            out.push_str(line);
            continue;
        };
        let terminator = if line.ends_with("\r\n") {
            "\r\n"
        } else if line.ends_with('\n') {
            "\n"
        } else {
            ""
        };
        out.push_str(&begin_marker(&directive.target_path));
        out.push('\n');
        out.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&end_marker(&directive.target_path));
        out.push_str(terminator);
    }
    out
}
