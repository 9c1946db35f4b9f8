//! # Install Command Implementation
//!
//! Installs a rule library from a git URL or a local directory and registers
//! the destination as a configured search root.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use rulestitch::defaults::default_library_dir;
use rulestitch::git::library_name;
use rulestitch::library::LibraryManager;
use rulestitch::output::emoji;

use super::Context;

/// Install a rule library and register it as a search root
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Git URL or local directory holding the library.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Directory to install into.
    ///
    /// Defaults to `<data dir>/rulestitch/libraries/<name>`.
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Branch or tag to check out for git sources.
    #[arg(long = "ref", value_name = "REF")]
    pub r#ref: Option<String>,
}

/// Execute the `install` command.
pub fn execute(args: InstallArgs, ctx: &Context) -> Result<()> {
    let destination = args
        .dest
        .unwrap_or_else(|| default_library_dir().join(library_name(&args.source)));

    let manager = LibraryManager::with_git_ref(ctx.config_path.clone(), args.r#ref);
    if !manager.install_library(&args.source, &destination) {
        anyhow::bail!("Failed to install library from {}", args.source);
    }

    println!(
        "{} Installed {} into {}",
        emoji(&ctx.output, "✅", "[OK]"),
        args.source,
        destination.display()
    );
    println!(
        "   Registered as a rule root in {}",
        ctx.config_path.display()
    );
    Ok(())
}
