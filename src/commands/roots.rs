//! # Roots Command Implementation
//!
//! Lists the computed search roots, lowest precedence first, with their origin
//! and whether the directory currently exists.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use rulestitch::roots::{Root, RootOrigin};

use super::Context;

/// List the search roots in precedence order
#[derive(Args, Debug)]
pub struct RootsArgs {
    /// Print the roots as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RootEntry {
    path: PathBuf,
    origin: RootOrigin,
    precedence: i32,
    exists: bool,
}

impl From<&Root> for RootEntry {
    fn from(root: &Root) -> Self {
        Self {
            path: root.path.clone(),
            origin: root.origin,
            precedence: root.precedence,
            exists: root.path.is_dir(),
        }
    }
}

/// Execute the `roots` command.
pub fn execute(args: RootsArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config();
    let entries: Vec<RootEntry> = ctx.roots(&config).iter().map(RootEntry::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let missing = if entry.exists {
            String::new()
        } else {
            format!(" {}", ctx.output.dim("(missing)"))
        };
        println!(
            "{:>4}  {:<12} {}{}",
            entry.precedence,
            entry.origin.to_string(),
            entry.path.display(),
            missing
        );
    }
    Ok(())
}
