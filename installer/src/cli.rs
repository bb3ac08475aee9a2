//! CLI argument definitions for the ToolGit installer.
//!
//! Every option is optional; running with no arguments installs
//! `bin/git_helpers.sh` under `~/.local`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Install the ToolGit shell helpers and their `gh_*` command wrappers.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "toolgit-install")]
#[command(version, about)]
#[command(long_about = concat!(
    "Install the ToolGit shell helpers and their gh_* command wrappers.\n\n",
    "The helper library is copied to ~/.local/lib/ToolGit/git_helpers.sh and ",
    "one small executable wrapper per gh_* function is written to ~/.local/bin. ",
    "Each wrapper sources the installed library and calls its function with the ",
    "arguments it was given.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Install from a ToolGit checkout:\n",
    "    $ toolgit-install\n\n",
    "  Preview without writing anything:\n",
    "    $ toolgit-install --dry-run\n\n",
    "  Install under a different prefix:\n",
    "    $ toolgit-install --prefix /opt/toolgit",
))]
pub struct Cli {
    /// Helper script to install [default: bin/git_helpers.sh].
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<Utf8PathBuf>,

    /// Installation prefix [default: ~/.local].
    #[arg(short, long, value_name = "DIR")]
    pub prefix: Option<Utf8PathBuf>,

    /// Show what would be installed and exit without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
