//! # Completions Command Implementation
//!
//! This module implements the `completions` subcommand, which writes a shell
//! completion script for every `rulestitch` subcommand and flag. Scripts are
//! generated with `clap_complete` from the same `Cli` definition the binary
//! parses, so they never drift from the real argument set.
//!
//! ## Supported Shells
//!
//! - **Bash**: Save under `bash-completion/completions/` or source from `.bashrc`
//! - **Zsh**: Save as `_rulestitch` somewhere on `fpath`
//! - **Fish**: Save to `~/.config/fish/completions/rulestitch.fish`
//! - **PowerShell**: Dot-source from the PowerShell profile
//! - **Elvish**: Evaluate from `rc.elv`
//!
//! ## Example
//!
//! ```bash
//! # Install bash completions for the current user
//! rulestitch completions bash > ~/.local/share/bash-completion/completions/rulestitch
//!
//! # Generate zsh completions
//! rulestitch completions zsh > ~/.zfunc/_rulestitch
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Shell types for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Friendly Interactive Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish Shell
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Execute the `completions` command.
///
/// # Arguments
/// * `args` - The parsed arguments naming the target shell
///
/// # Behavior
/// Writes the completion script to stdout and nothing else, so the output can
/// be redirected straight into the shell's completion directory. No
/// configuration is read and no roots are computed.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let shell: Shell = args.shell.into();
    generate(shell, &mut cmd, "rulestitch", &mut io::stdout());
    Ok(())
}
