//! Installation layout and directory preparation.
//!
//! The layout under the installation prefix (`~/.local` by default) is:
//!
//! ```text
//! {prefix}/lib/ToolGit/git_helpers.sh
//! {prefix}/bin/{function wrappers}
//! ```

use crate::dirs::BaseDirs;
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::fs::DirBuilder;

/// File name of the helper library, both in the source tree and once installed.
pub const LIBRARY_FILE_NAME: &str = "git_helpers.sh";

/// Directory under `{prefix}/lib` holding the installed library.
pub const LIBRARY_DIR_NAME: &str = "ToolGit";

/// Resolved source and destination paths for one installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    prefix: Utf8PathBuf,
    lib_dir: Utf8PathBuf,
    bin_dir: Utf8PathBuf,
    source: Utf8PathBuf,
    library_path: Utf8PathBuf,
}

impl InstallLayout {
    /// Build the layout rooted at `prefix`, installing from `source`.
    #[must_use]
    pub fn new(prefix: Utf8PathBuf, source: Utf8PathBuf) -> Self {
        let lib_dir = prefix.join("lib").join(LIBRARY_DIR_NAME);
        let bin_dir = prefix.join("bin");
        let library_path = lib_dir.join(LIBRARY_FILE_NAME);
        Self {
            prefix,
            lib_dir,
            bin_dir,
            source,
            library_path,
        }
    }

    /// Resolve the layout, falling back to `{home}/.local` and
    /// `bin/git_helpers.sh` when no overrides are given.
    ///
    /// The home directory is only consulted when `prefix` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::HomeDirUnavailable`] when the home directory
    /// is needed but cannot be determined, or
    /// [`InstallerError::NonUtf8Path`] when it is not valid UTF-8.
    pub fn resolve(
        dirs: &dyn BaseDirs,
        prefix: Option<&Utf8Path>,
        source: Option<&Utf8Path>,
    ) -> Result<Self> {
        let prefix = match prefix {
            Some(prefix) => prefix.to_owned(),
            None => home_dir(dirs)?.join(".local"),
        };
        let source = source.map_or_else(default_source, Utf8Path::to_owned);

        let layout = Self::new(prefix, source);
        debug!(
            "resolved layout: prefix={}, library={}, bin={}",
            layout.prefix, layout.library_path, layout.bin_dir
        );
        Ok(layout)
    }

    /// Create the library and binary directories, including any missing
    /// parents. Existing directories are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::CreateDir`] for the first directory that
    /// cannot be created.
    pub fn prepare(&self) -> Result<()> {
        create_dir_all(&self.lib_dir)?;
        create_dir_all(&self.bin_dir)
    }

    /// Installation prefix.
    #[must_use]
    pub fn prefix(&self) -> &Utf8Path {
        &self.prefix
    }

    /// Directory that receives the library copy.
    #[must_use]
    pub fn lib_dir(&self) -> &Utf8Path {
        &self.lib_dir
    }

    /// Directory that receives the wrapper scripts.
    #[must_use]
    pub fn bin_dir(&self) -> &Utf8Path {
        &self.bin_dir
    }

    /// Helper script to install.
    #[must_use]
    pub fn source(&self) -> &Utf8Path {
        &self.source
    }

    /// Install location of the helper library.
    #[must_use]
    pub fn library_path(&self) -> &Utf8Path {
        &self.library_path
    }
}

/// Default helper script location, relative to the working directory.
#[must_use]
pub fn default_source() -> Utf8PathBuf {
    Utf8PathBuf::from("bin").join(LIBRARY_FILE_NAME)
}

fn home_dir(dirs: &dyn BaseDirs) -> Result<Utf8PathBuf> {
    let home = dirs.home_dir().ok_or(InstallerError::HomeDirUnavailable)?;
    Utf8PathBuf::from_path_buf(home).map_err(|path| InstallerError::NonUtf8Path {
        path: path.display().to_string(),
    })
}

fn create_dir_all(path: &Utf8Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    debug!("creating directory {path}");
    builder
        .create(path)
        .map_err(|source| InstallerError::CreateDir {
            path: path.to_owned(),
            source,
        })
}
