//! User-facing progress messages.
//!
//! Lines carry short icon prefixes for readability. They are not meant to be
//! parsed.

use crate::discovery::FunctionName;
use crate::error::InstallerError;
use camino::Utf8Path;
use log::debug;
use std::io::Write;

/// Command suggested in the usage hint when no functions were discovered.
pub const FALLBACK_EXAMPLE_COMMAND: &str = "gh_help";

/// Message printed after the library copy is written.
#[must_use]
pub fn library_installed_message(library_path: &Utf8Path) -> String {
    format!("📦 git_helpers.sh installed to: {library_path}")
}

/// Message printed after each wrapper is written.
#[must_use]
pub fn wrapper_created_message(wrapper_path: &Utf8Path) -> String {
    format!("🛠 Created wrapper: {wrapper_path}")
}

/// Final success message and usage hints.
///
/// `example` is the command shown in the usage hint; [`None`] falls back to
/// [`FALLBACK_EXAMPLE_COMMAND`].
#[must_use]
pub fn completion_lines(bin_dir: &Utf8Path, example: Option<&FunctionName>) -> [String; 3] {
    let example = example.map_or(FALLBACK_EXAMPLE_COMMAND, FunctionName::as_str);
    [
        "✅ ToolGit installation complete!".to_owned(),
        format!("💡 Make sure {bin_dir} is in your PATH."),
        format!("💡 You can now run gh_* commands directly, e.g., {example}"),
    ]
}

/// Message printed when the run fails.
#[must_use]
pub fn error_message(err: &InstallerError) -> String {
    format!("❌ Error: {err}")
}

/// Writes one line of user-facing output.
///
/// Output is informational only, so a failing writer (closed or full stdout)
/// is logged and otherwise ignored.
pub fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if let Err(err) = writeln!(out, "{message}") {
        debug!("dropped output line: {err}");
    }
}
