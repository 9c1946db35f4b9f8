//! # Validate Command Implementation
//!
//! Resolves every rule document under every registered root and reports the
//! include tally plus each failure as `<file>:<line>` diagnostics.
//!
//! This command is read-only. It exits non-zero when any include failed, or,
//! with `--strict`, when any malformed directive was found.

use anyhow::{Context as _, Result};
use clap::Args;

use rulestitch::output::emoji;
use rulestitch::validator::{validate_with, ValidationReport};

use super::Context;

/// Validate include directives across all roots
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Treat malformed directive warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let (config, mut resolver) = ctx.resolver();
    let exclude = config
        .exclude_patterns()
        .context("Invalid exclude pattern in configuration")?;

    let report = validate_with(&mut resolver, &exclude);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, ctx);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed: {} include(s) failed", report.failed_includes);
    }
    if args.strict && !report.warnings.is_empty() {
        anyhow::bail!(
            "Validation failed in strict mode: {} warning(s)",
            report.warnings.len()
        );
    }
    Ok(())
}

fn print_report(report: &ValidationReport, ctx: &Context) {
    let out = &ctx.output;
    println!("{} Include validation summary:", emoji(out, "📊", "[INFO]"));
    println!("   Files scanned: {}", report.total_files);
    println!("   Files with includes: {}", report.files_with_includes);
    println!("   Total includes: {}", report.total_includes);
    println!("   Successful: {}", report.successful_includes);
    println!("   Failed: {}", report.failed_includes);

    if !report.errors.is_empty() {
        println!("\n{} Errors:", emoji(out, "❌", "[ERR]"));
        for error in &report.errors {
            println!("   {}", out.error_line(error));
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{} Warnings:", emoji(out, "⚠️", "[WARN]"));
        for warning in &report.warnings {
            println!("   {}", out.warning_line(warning));
        }
    }

    if report.is_ok() {
        println!("\n{} All includes resolved", emoji(out, "✅", "[OK]"));
    }
}
