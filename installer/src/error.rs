//! Error types for the ToolGit installer.
//!
//! Every failure the installer can hit is fatal. The variants exist so that
//! messages name the step and path involved, not so callers can recover.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during installation.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The home directory of the invoking user could not be determined.
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    /// A resolved path is not valid UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },

    /// An installation directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The helper script could not be read.
    #[error("failed to read {path}: {source}")]
    ReadSource {
        /// Path of the helper script.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The helper script could not be written to its install location.
    #[error("failed to write {path}: {source}")]
    WriteLibrary {
        /// Destination path of the library copy.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A wrapper script could not be written.
    #[error("failed to write wrapper {path}: {source}")]
    WriteWrapper {
        /// Path of the wrapper script.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;
