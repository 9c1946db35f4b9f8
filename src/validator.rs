//! # Validation Sweep
//!
//! Walks every rule document under every registered root, resolves it, and
//! tallies how many includes succeeded or failed. The sweep never stops early:
//! unreadable documents and missing targets are counted and reported, and the
//! run always produces a complete [`ValidationReport`].
//!
//! Only files with a recognized rule extension (`.md`, `.mdc`, `.yaml`,
//! `.yml`, `.json`) are visited. Hidden directories are skipped, as are files
//! matching the configuration's `exclude` globs (matched against the path
//! relative to the root being walked).

use glob::Pattern;
use log::debug;
use serde::Serialize;

use crate::document::{DocumentFormat, ResolvedDocument};
use crate::path::absolutize;
use crate::resolver::Resolver;
use crate::roots::Root;

/// Aggregate result of a validation sweep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_files: usize,
    pub files_with_includes: usize,
    pub total_includes: usize,
    pub successful_includes: usize,
    pub failed_includes: usize,
    /// Every diagnostic error, in visiting order.
    pub errors: Vec<String>,
    /// Malformed directive warnings, in visiting order.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Fold one resolved document into the tally.
    pub fn record(&mut self, document: &ResolvedDocument) {
        self.total_files += 1;
        let count = document.diagnostics.directive_count;
        if count > 0 {
            self.files_with_includes += 1;
        }
        self.total_includes += count;
        self.successful_includes += document.resolved_count();
        self.failed_includes += document.unresolved_count();
        self.errors.extend(document.diagnostics.errors.iter().cloned());
        self.warnings
            .extend(document.diagnostics.warnings.iter().cloned());
    }

    /// True when no include failed and no document reported an error.
    pub fn is_ok(&self) -> bool {
        self.failed_includes == 0 && self.errors.is_empty()
    }
}

/// Validate every document under `roots`, reading from the host filesystem.
pub fn validate_all(roots: &[Root]) -> ValidationReport {
    let mut resolver = Resolver::new(roots.to_vec());
    validate_with(&mut resolver, &[])
}

/// Validate every document under the resolver's roots.
///
/// Documents are resolved through the resolver's cache, so a file included
/// from many places is still read once.
pub fn validate_with(resolver: &mut Resolver, exclude: &[Pattern]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let roots = resolver.roots().to_vec();

    for root in &roots {
        let root_dir = absolutize(&root.path);
        let files = resolver.source().list_files(&root_dir);
        debug!(
            "Validating {} files under {} root {}",
            files.len(),
            root.origin,
            root_dir.display()
        );

        for file in files {
            if !DocumentFormat::from_path(&file).is_recognized() {
                continue;
            }
            let excluded = file
                .strip_prefix(&root_dir)
                .map(|rel| exclude.iter().any(|p| p.matches_path(rel)))
                .unwrap_or(false);
            if excluded {
                debug!("Skipping excluded {}", file.display());
                continue;
            }
            let document = resolver.resolve(&file);
            report.record(&document);
        }
    }

    report
}
