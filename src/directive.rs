//! # Directive Parser
//!
//! Extracts `@include` directives from raw document text. A directive is a
//! whole physical line of the form:
//!
//! ```text
//! @include path/to/file.md
//! @include %shared/policy.md
//! ```
//!
//! A leading `%` on the target restricts the search to the extra (configured
//! and environment) roots; without it every root is eligible. Trailing
//! whitespace is ignored. Parsing is purely syntactic: nothing here checks
//! whether the target exists.
//!
//! Lines that start with the `@include` keyword but do not match the full
//! pattern (no target, or extra tokens after it) are not directives. They are
//! left as ordinary text and reported through [`ParsedDirectives::warnings`].

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const KEYWORD: &str = "@include";

static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@include\s+(%?)(\S+)\s*$").expect("directive regex is valid"));

/// Which roots an include may be resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    /// Any root, including the built-in default.
    AllRoots,
    /// Configured and environment roots only (`%` prefix).
    ExtraRootsOnly,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::AllRoots => f.write_str("all-roots"),
            Scope::ExtraRootsOnly => f.write_str("extra-roots-only"),
        }
    }
}

/// One `@include` occurrence in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeDirective {
    /// The directive line exactly as written, without its line terminator.
    pub raw_line: String,
    /// Target path with any scope marker stripped.
    pub target_path: String,
    pub scope: Scope,
    /// 1-based line number within the source document.
    pub source_line: usize,
    /// Fully flattened body of the target, once resolved.
    pub resolved_body: Option<String>,
    /// Absolute path of the file the target resolved to.
    pub resolved_path: Option<PathBuf>,
}

impl IncludeDirective {
    pub fn is_resolved(&self) -> bool {
        self.resolved_body.is_some()
    }
}

/// A line that looks like a directive but does not parse as one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedDirective {
    pub source_line: usize,
    pub text: String,
}

/// Result of scanning a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDirectives {
    pub directives: Vec<IncludeDirective>,
    pub warnings: Vec<MalformedDirective>,
}

/// Parse a single line, returning the directive it holds, if any.
pub fn parse_line(line: &str, source_line: usize) -> Option<IncludeDirective> {
    let captures = DIRECTIVE_RE.captures(line)?;
    let scope = if captures[1].is_empty() {
        Scope::AllRoots
    } else {
        Scope::ExtraRootsOnly
    };
    Some(IncludeDirective {
        raw_line: line.to_string(),
        target_path: captures[2].to_string(),
        scope,
        source_line,
        resolved_body: None,
        resolved_path: None,
    })
}

/// Whether a line starts with the `@include` keyword as a whole word.
fn looks_like_directive(line: &str) -> bool {
    match line.strip_prefix(KEYWORD) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Scan a document for directives and malformed directive lines.
pub fn scan(content: &str) -> ParsedDirectives {
    let mut parsed = ParsedDirectives::default();
    for (index, line) in content.lines().enumerate() {
        let source_line = index + 1;
        if let Some(directive) = parse_line(line, source_line) {
            parsed.directives.push(directive);
        } else if looks_like_directive(line) {
            parsed.warnings.push(MalformedDirective {
                source_line,
                text: line.trim_end().to_string(),
            });
        }
    }
    parsed
}

/// Extract every directive in document order.
pub fn parse_directives(content: &str) -> Vec<IncludeDirective> {
    scan(content).directives
}
