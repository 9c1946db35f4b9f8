//! Output adapters for resolved documents
//!
//! Tool-specific exporters plug in by implementing [`OutputAdapter`]. Two are
//! built in: the flattened body as-is, and a JSON dump of the whole
//! [`ResolvedDocument`] including directives and diagnostics.

use crate::document::ResolvedDocument;
use crate::error::Result;

/// Converts a resolved document into a consumer-specific text form
pub trait OutputAdapter {
    /// Short name used to select the adapter from the CLI.
    fn name(&self) -> &'static str;

    fn convert(&self, document: &ResolvedDocument) -> Result<String>;
}

/// Emits the flattened body unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenedAdapter;

impl OutputAdapter for FlattenedAdapter {
    fn name(&self) -> &'static str {
        "flattened"
    }

    fn convert(&self, document: &ResolvedDocument) -> Result<String> {
        Ok(document.body.clone())
    }
}

/// Emits the full document as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl OutputAdapter for JsonAdapter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn convert(&self, document: &ResolvedDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}

/// Look up a built-in adapter by name.
pub fn adapter_by_name(name: &str) -> Option<Box<dyn OutputAdapter>> {
    match name {
        "flattened" => Some(Box::new(FlattenedAdapter)),
        "json" => Some(Box::new(JsonAdapter)),
        _ => None,
    }
}
