//! Directory resolution abstraction.
//!
//! The installer only needs the invoking user's home directory. It is read
//! through [`BaseDirs`] so that tests can point installs at a scratch
//! directory instead of the real home.

use std::path::PathBuf;

/// Source of platform base directories.
#[cfg_attr(test, mockall::automock)]
pub trait BaseDirs {
    /// Returns the home directory of the invoking user, if it can be found.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// [`BaseDirs`] backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn home_dir(&self) -> Option<PathBuf> {
        directories_next::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}
