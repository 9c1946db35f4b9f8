//! # Tree Command Implementation
//!
//! Displays the include hierarchy of a document. Unresolved directives appear
//! as leaves marked `(unresolved)`.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::borrow::Cow;
use std::path::PathBuf;

use rulestitch::resolver::IncludeNode;

use super::Context;

/// Display the include tree of a document
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// The document whose includes to display.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum depth to display. 0 shows only the document itself.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, ctx: &Context) -> Result<()> {
    if !args.file.is_file() {
        anyhow::bail!("Document not found: {}", args.file.display());
    }

    let (_, mut resolver) = ctx.resolver();
    let root = resolver.include_tree(&args.file);
    let tree = TreeNode::build(&root, args.depth.unwrap_or(usize::MAX), 0);
    print_tree(&tree).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    Ok(())
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn build(node: &IncludeNode, max_depth: usize, depth: usize) -> Self {
        let children = if depth >= max_depth {
            Vec::new()
        } else {
            node.children
                .iter()
                .map(|child| Self::build(child, max_depth, depth + 1))
                .collect()
        };
        let label = match (&node.path, depth) {
            (Some(path), d) if d > 0 => format!("{} -> {}", node.label, path.display()),
            _ => node.label.clone(),
        };
        Self { label, children }
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
