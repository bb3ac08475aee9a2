//! Install flow orchestration.
//!
//! Steps run strictly in order and the first error aborts the run:
//! prepare directories, copy the library, discover functions, write one
//! wrapper per function, report. Re-running after fixing the cause is the
//! recovery path. Progress output is best-effort and never fails a run.

use crate::discovery::{FunctionName, discover_functions};
use crate::error::{InstallerError, Result};
use crate::host::HostFamily;
use crate::layout::InstallLayout;
use crate::library::install_library;
use crate::output::{
    completion_lines, library_installed_message, wrapper_created_message, write_line,
};
use crate::wrapper::{Wrapper, is_directory_in_path, path_instructions};
use camino::Utf8PathBuf;
use log::debug;
use std::io::Write;

/// Outcome of an install (or dry-run) pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Install location of the helper library.
    pub library_path: Utf8PathBuf,
    /// Functions discovered in the library, in line order.
    pub functions: Vec<FunctionName>,
    /// Wrapper paths, one per discovered function.
    pub wrappers: Vec<Utf8PathBuf>,
}

/// Runs the installation for one resolved layout.
#[derive(Debug, Clone)]
pub struct Installer {
    layout: InstallLayout,
    host: HostFamily,
    quiet: bool,
}

impl Installer {
    /// Create an installer for `layout`, generating wrappers for `host`.
    #[must_use]
    pub fn new(layout: InstallLayout, host: HostFamily) -> Self {
        Self {
            layout,
            host,
            quiet: false,
        }
    }

    /// Suppress progress and hint output. Errors are still returned.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Install the library and generate wrappers.
    ///
    /// # Errors
    ///
    /// Returns the first failure from directory creation, the library copy,
    /// or a wrapper write.
    pub fn run(&self, out: &mut dyn Write) -> Result<InstallReport> {
        self.layout.prepare()?;

        let library_path = self.layout.library_path();
        let data = install_library(self.layout.source(), library_path)?;
        self.say(out, library_installed_message(library_path));

        let functions = scan(&data);
        let mut wrappers = Vec::with_capacity(functions.len());
        for function in &functions {
            let wrapper = self.render(function);
            wrapper.write()?;
            self.say(out, wrapper_created_message(&wrapper.path));
            wrappers.push(wrapper.path);
        }

        self.report_completion(out, functions.first());

        Ok(InstallReport {
            library_path: library_path.to_owned(),
            functions,
            wrappers,
        })
    }

    /// Read and scan the source, then print what [`Installer::run`] would
    /// write without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::ReadSource`] if the source cannot be read.
    pub fn plan(&self, out: &mut dyn Write) -> Result<InstallReport> {
        let source = self.layout.source();
        let data = std::fs::read(source).map_err(|e| InstallerError::ReadSource {
            path: source.to_owned(),
            source: e,
        })?;

        let functions = scan(&data);
        let wrappers: Vec<Utf8PathBuf> = functions
            .iter()
            .map(|function| self.render(function).path)
            .collect();

        self.say(out, "Dry run - no files will be modified");
        self.say(out, "");
        self.say(out, format!("Source: {source}"));
        self.say(out, format!("Library: {}", self.layout.library_path()));
        self.say(out, format!("Wrapper directory: {}", self.layout.bin_dir()));
        self.say(out, format!("Host family: {}", self.host));
        self.say(out, "");
        self.say(out, "Wrappers to create:");
        for path in &wrappers {
            self.say(out, format!("  - {path}"));
        }

        Ok(InstallReport {
            library_path: self.layout.library_path().to_owned(),
            functions,
            wrappers,
        })
    }

    fn render(&self, function: &FunctionName) -> Wrapper {
        Wrapper::render(
            self.host,
            self.layout.bin_dir(),
            function,
            self.layout.library_path(),
        )
    }

    fn report_completion(&self, out: &mut dyn Write, example: Option<&FunctionName>) {
        let bin_dir = self.layout.bin_dir();
        for line in completion_lines(bin_dir, example) {
            self.say(out, line);
        }

        if !is_directory_in_path(bin_dir.as_std_path()) {
            self.say(out, "");
            self.say(out, path_instructions(self.host, bin_dir));
        }
    }

    fn say(&self, out: &mut dyn Write, message: impl std::fmt::Display) {
        if !self.quiet {
            write_line(out, message);
        }
    }
}

/// Invalid UTF-8 is replaced with U+FFFD before scanning, so a stray byte in
/// a function name shows up in the wrapper name rather than passing through
/// raw. Wrapper paths are UTF-8, and the library copy itself is unaffected.
fn scan(data: &[u8]) -> Vec<FunctionName> {
    let functions = discover_functions(&String::from_utf8_lossy(data));
    debug!("discovered {} helper function(s)", functions.len());
    functions
}
