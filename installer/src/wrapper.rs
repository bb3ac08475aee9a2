//! Wrapper script generation for `gh_*` helper functions.
//!
//! Each wrapper sources the installed library and calls one function,
//! forwarding its arguments. Unix wrappers are extensionless `bash` scripts;
//! Windows wrappers are `.bat` files that hand the call to `bash -c`.

use crate::discovery::FunctionName;
use crate::error::{InstallerError, Result};
use crate::host::HostFamily;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::path::Path;

/// A rendered wrapper script, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    /// Destination of the script inside the binary directory.
    pub path: Utf8PathBuf,
    /// Script contents.
    pub content: String,
}

impl Wrapper {
    /// Render the wrapper for `function` on the given host family.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use toolgit_installer::discovery::FunctionName;
    /// use toolgit_installer::host::HostFamily;
    /// use toolgit_installer::wrapper::Wrapper;
    ///
    /// let wrapper = Wrapper::render(
    ///     HostFamily::Unix,
    ///     Utf8Path::new("/home/user/.local/bin"),
    ///     &FunctionName::from("gh_status"),
    ///     Utf8Path::new("/home/user/.local/lib/ToolGit/git_helpers.sh"),
    /// );
    ///
    /// assert!(wrapper.path.ends_with("gh_status"));
    /// assert!(wrapper.content.ends_with("gh_status \"$@\""));
    /// ```
    #[must_use]
    pub fn render(
        host: HostFamily,
        bin_dir: &Utf8Path,
        function: &FunctionName,
        library_path: &Utf8Path,
    ) -> Self {
        let path = bin_dir.join(format!("{function}{}", host.wrapper_extension()));
        let content = match host {
            HostFamily::Unix => format!(
                concat!(
                    "#!/usr/bin/env bash\n",
                    "source '{library}'\n",
                    "{function} \"$@\""
                ),
                library = library_path,
                function = function,
            ),
            HostFamily::Windows => format!(
                concat!(
                    "@echo off\n",
                    "bash -c \"source '{library}' && {function} %*\""
                ),
                library = library_path,
                function = function,
            ),
        };
        Self { path, content }
    }

    /// Write the script, replacing any existing file, and mark it executable
    /// (mode 0755) on Unix.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::WriteWrapper`] if the file cannot be written
    /// or its permissions cannot be set.
    pub fn write(&self) -> Result<()> {
        let wrapper_error = |source| InstallerError::WriteWrapper {
            path: self.path.clone(),
            source,
        };

        debug!("writing wrapper {}", self.path);
        std::fs::write(&self.path, &self.content).map_err(wrapper_error)?;
        make_executable(&self.path).map_err(wrapper_error)
    }
}

#[cfg(unix)]
fn make_executable(path: &Utf8Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    // rwxr-xr-x
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Utf8Path) -> std::io::Result<()> {
    Ok(())
}

/// Checks if a directory is in the PATH environment variable.
#[must_use]
pub fn is_directory_in_path(dir: &Path) -> bool {
    std::env::var_os("PATH")
        .is_some_and(|path| std::env::split_paths(&path).any(|p| p == dir))
}

/// Returns instructions for adding a directory to PATH.
#[must_use]
pub fn path_instructions(host: HostFamily, bin_dir: &Utf8Path) -> String {
    match host {
        HostFamily::Unix => format!(
            concat!(
                "Add the following to your shell profile (~/.bashrc or ~/.zshrc):\n",
                "  export PATH=\"{}:$PATH\""
            ),
            bin_dir
        ),
        HostFamily::Windows => format!(
            concat!(
                "Add the following directory to your PATH:\n",
                "  {}\n\n",
                "Or run in PowerShell:\n",
                "  [Environment]::SetEnvironmentVariable(",
                "\"PATH\", \"$env:PATH;{}\", \"User\")"
            ),
            bin_dir, bin_dir
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn library_path() -> Utf8PathBuf {
        Utf8PathBuf::from("/home/user/.local/lib/ToolGit/git_helpers.sh")
    }

    #[rstest]
    fn unix_wrapper_sources_library_and_forwards_arguments(library_path: Utf8PathBuf) {
        let bin_dir = Utf8PathBuf::from("/home/user/.local/bin");
        let wrapper = Wrapper::render(
            HostFamily::Unix,
            &bin_dir,
            &FunctionName::from("gh_status"),
            &library_path,
        );

        assert_eq!(wrapper.path, bin_dir.join("gh_status"));
        assert_eq!(
            wrapper.content,
            concat!(
                "#!/usr/bin/env bash\n",
                "source '/home/user/.local/lib/ToolGit/git_helpers.sh'\n",
                "gh_status \"$@\""
            )
        );
    }

    #[rstest]
    fn windows_wrapper_is_a_batch_file_calling_bash(library_path: Utf8PathBuf) {
        let bin_dir = Utf8PathBuf::from("C:/Users/user/.local/bin");
        let wrapper = Wrapper::render(
            HostFamily::Windows,
            &bin_dir,
            &FunctionName::from("gh_status"),
            &library_path,
        );

        assert_eq!(wrapper.path, bin_dir.join("gh_status.bat"));
        assert_eq!(
            wrapper.content,
            concat!(
                "@echo off\n",
                "bash -c \"source '/home/user/.local/lib/ToolGit/git_helpers.sh' && gh_status %*\""
            )
        );
    }

    #[rstest]
    fn names_pass_through_unvalidated(library_path: Utf8PathBuf) {
        let bin_dir = Utf8PathBuf::from("/bin-dir");
        let wrapper = Wrapper::render(
            HostFamily::Unix,
            &bin_dir,
            &FunctionName::from("gh_push "),
            &library_path,
        );

        assert_eq!(wrapper.path, bin_dir.join("gh_push "));
        assert!(wrapper.content.ends_with("gh_push  \"$@\""));
    }

    #[cfg(unix)]
    #[rstest]
    fn write_creates_executable_script(library_path: Utf8PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("failed to create temp dir");
        let bin_dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("not UTF-8");
        let wrapper = Wrapper::render(
            HostFamily::Unix,
            &bin_dir,
            &FunctionName::from("gh_log"),
            &library_path,
        );

        wrapper.write().expect("failed to write wrapper");

        let written = std::fs::read_to_string(&wrapper.path).expect("failed to read wrapper");
        assert_eq!(written, wrapper.content);
        let mode = std::fs::metadata(&wrapper.path)
            .expect("failed to read metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755, "script should be executable");
    }

    #[rstest]
    fn write_fails_when_bin_dir_is_missing(library_path: Utf8PathBuf) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let bin_dir = Utf8PathBuf::try_from(temp.path().join("missing")).expect("not UTF-8");
        let wrapper = Wrapper::render(
            HostFamily::Unix,
            &bin_dir,
            &FunctionName::from("gh_log"),
            &library_path,
        );

        let err = wrapper.write().expect_err("expected failure");
        assert!(
            matches!(err, InstallerError::WriteWrapper { ref path, .. } if *path == wrapper.path),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn is_directory_in_path_returns_false_for_random_dir() {
        let temp = TempDir::new().expect("failed to create temp dir");
        assert!(!is_directory_in_path(temp.path()));
    }

    #[rstest]
    #[case::unix(HostFamily::Unix, "export PATH=")]
    #[case::windows(HostFamily::Windows, "PowerShell")]
    fn path_instructions_contains_directory(#[case] host: HostFamily, #[case] marker: &str) {
        let dir = Utf8PathBuf::from("/test/bin");
        let instructions = path_instructions(host, &dir);
        assert!(instructions.contains("/test/bin"));
        assert!(instructions.contains(marker));
    }
}
