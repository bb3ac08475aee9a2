//! Host operating system family.
//!
//! Only wrapper syntax depends on the host, so the distinction is reduced to
//! two families and resolved once at startup.

use std::fmt;

/// Operating system family that determines wrapper script syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    /// Any non-Windows system: extensionless shell scripts.
    Unix,
    /// Windows: `.bat` scripts that hand off to `bash -c`.
    Windows,
}

impl HostFamily {
    /// Return the family of the platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// File extension appended to wrapper names, including the dot.
    #[must_use]
    pub const fn wrapper_extension(self) -> &'static str {
        match self {
            Self::Unix => "",
            Self::Windows => ".bat",
        }
    }
}

impl fmt::Display for HostFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => f.write_str("unix"),
            Self::Windows => f.write_str("windows"),
        }
    }
}
