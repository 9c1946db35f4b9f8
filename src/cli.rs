//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{self, Context};

/// rulestitch - Resolve @include directives across prioritized rule directories
#[derive(Parser, Debug)]
#[command(name = "rulestitch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Path to the persisted configuration file listing `rule_roots`.
    ///
    /// Defaults to `<config dir>/rulestitch/config.yaml`.
    #[arg(long, global = true, value_name = "FILE", env = "RULESTITCH_CONFIG")]
    config: Option<PathBuf>,

    /// Built-in default rule directory (lowest precedence root).
    ///
    /// Defaults to `<data dir>/rulestitch/rules`.
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "RULESTITCH_DEFAULT_ROOT"
    )]
    default_root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a document and print the flattened result
    Resolve(commands::resolve::ResolveArgs),

    /// Resolve every rule document under every root and report failures
    Validate(commands::validate::ValidateArgs),

    /// List the search roots in precedence order
    Roots(commands::roots::RootsArgs),

    /// Display the include tree of a document
    Tree(commands::tree::TreeArgs),

    /// Install a rule library and register it as a search root
    Install(commands::install::InstallArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let ctx = Context::new(self.config, self.default_root, &self.color);

        match self.command {
            Commands::Resolve(args) => commands::resolve::execute(args, &ctx),
            Commands::Validate(args) => commands::validate::execute(args, &ctx),
            Commands::Roots(args) => commands::roots::execute(args, &ctx),
            Commands::Tree(args) => commands::tree::execute(args, &ctx),
            Commands::Install(args) => commands::install::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr; `RUST_LOG` takes precedence over the flag.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
