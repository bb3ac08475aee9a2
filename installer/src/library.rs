//! Installation of the helper library itself.

use crate::error::{InstallerError, Result};
use camino::Utf8Path;
use log::debug;
use std::fs;

/// Copy the helper script at `source` to `destination` byte for byte.
///
/// The destination is created or truncated and ends up with mode 0644 on
/// Unix. The bytes read are returned so the caller can scan them without a
/// second read.
///
/// # Errors
///
/// Returns [`InstallerError::ReadSource`] if the source cannot be read, or
/// [`InstallerError::WriteLibrary`] if the destination cannot be written.
pub fn install_library(source: &Utf8Path, destination: &Utf8Path) -> Result<Vec<u8>> {
    let data = fs::read(source).map_err(|e| InstallerError::ReadSource {
        path: source.to_owned(),
        source: e,
    })?;
    debug!("read {} bytes from {source}", data.len());

    let write_error = |e| InstallerError::WriteLibrary {
        path: destination.to_owned(),
        source: e,
    };
    fs::write(destination, &data).map_err(write_error)?;
    set_library_permissions(destination).map_err(write_error)?;

    Ok(data)
}

#[cfg(unix)]
fn set_library_permissions(path: &Utf8Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_library_permissions(_path: &Utf8Path) -> std::io::Result<()> {
    Ok(())
}
