//! # Resolve Command Implementation
//!
//! Resolves a single document and writes the result to stdout or a file.
//! Diagnostics go to stderr so the flattened output stays clean for piping.
//! The command succeeds even when includes are missing unless `--strict` is
//! given.

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;

use rulestitch::export::{FlattenedAdapter, JsonAdapter, OutputAdapter};
use rulestitch::output::emoji;

use super::Context;

/// Output format for resolved documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The flattened document body
    Flattened,
    /// The full resolved document, with directives and diagnostics, as JSON
    Json,
}

/// Resolve a document and print the flattened result
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// The document to resolve.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "flattened")]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail if any include could not be resolved.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs, ctx: &Context) -> Result<()> {
    if !args.file.is_file() {
        anyhow::bail!("Document not found: {}", args.file.display());
    }

    let (_, mut resolver) = ctx.resolver();
    let document = resolver.resolve(&args.file);

    let adapter: Box<dyn OutputAdapter> = match args.format {
        OutputFormat::Flattened => Box::new(FlattenedAdapter),
        OutputFormat::Json => Box::new(JsonAdapter),
    };
    let rendered = adapter
        .convert(&document)
        .with_context(|| format!("Failed to render {} output", adapter.name()))?;

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    let out = &ctx.output;
    for warning in &document.diagnostics.warnings {
        eprintln!(
            "{} {}",
            emoji(out, "⚠️", "[WARN]"),
            out.warning_line(warning)
        );
    }
    for error in &document.diagnostics.errors {
        eprintln!("{} {}", emoji(out, "❌", "[ERR]"), out.error_line(error));
    }

    if args.strict && document.has_errors() {
        anyhow::bail!(
            "{} include(s) could not be resolved",
            document.diagnostics.errors.len()
        );
    }
    Ok(())
}
