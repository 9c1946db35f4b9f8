//! # rulestitch
//!
//! Resolves `@include` directives embedded in rule documents (coding
//! standards, policy snippets, tool configuration blocks) and assembles a
//! single flattened document from fragments spread over several prioritized
//! directories.
//!
//! ## Quick Example
//!
//! ```
//! use rulestitch::filesystem::MemoryFS;
//! use rulestitch::resolver::Resolver;
//! use rulestitch::roots::compute_roots;
//! use std::path::Path;
//!
//! let mut fs = MemoryFS::new();
//! fs.add_file_string("/work/AGENTS.md", "intro\n@include style.md\n").unwrap();
//! fs.add_file_string("/rules/style.md", "Use four spaces.").unwrap();
//!
//! let roots = compute_roots::<&str, &str>(&[], &[], Path::new("/rules"));
//! let mut resolver = Resolver::with_source(roots, Box::new(fs));
//! let doc = resolver.resolve("/work/AGENTS.md");
//!
//! assert!(doc.body.contains("# Included from: style.md"));
//! assert!(doc.body.contains("Use four spaces."));
//! assert!(doc.diagnostics.errors.is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Roots (`roots`, `config`, `defaults`)**: the directories searched for
//!   include targets. A built-in default directory, the `rule_roots` list of
//!   the persisted configuration and the `RULESTITCH_PATH` environment
//!   variable each contribute roots with increasing precedence.
//! - **Directives (`directive`)**: `@include path` and `@include %path` lines.
//!   The `%` form skips the built-in default root.
//! - **Resolution (`resolver`, `cache`)**: a `Resolver` session expands
//!   directives recursively, memoizes every document it touches, and reports
//!   missing targets and circular includes as diagnostics instead of errors.
//! - **Validation (`validator`)**: resolves every rule document under every
//!   root and tallies successful and failed includes.
//! - **Libraries (`library`, `git`)**: installs rule bundles from git or a
//!   local directory and registers them as new roots.
//! - **Export (`export`)**: pluggable adapters turning a resolved document
//!   into consumer-specific output.

pub mod cache;
pub mod config;
pub mod defaults;
pub mod directive;
pub mod document;
pub mod error;
pub mod export;
pub mod filesystem;
pub mod git;
pub mod library;
pub mod output;
pub mod path;
pub mod resolver;
pub mod roots;
pub mod validator;

#[cfg(test)]
mod path_proptest;
