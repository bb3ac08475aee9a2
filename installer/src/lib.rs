//! ToolGit installer library.
//!
//! This crate installs the `git_helpers.sh` shell library under the user's
//! local prefix and writes one executable wrapper per `gh_*` function it
//! defines. It backs the `toolgit-install` binary and can be driven directly
//! from tests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`dirs`] - Home directory resolution abstraction
//! - [`discovery`] - Textual discovery of `gh_*` functions
//! - [`error`] - Error types naming the failed step and path
//! - [`host`] - Host operating system family
//! - [`install`] - Install flow orchestration
//! - [`layout`] - Installation paths and directory preparation
//! - [`library`] - Byte-for-byte copy of the helper library
//! - [`output`] - User-facing progress messages
//! - [`wrapper`] - Wrapper script rendering and writing

pub mod cli;
pub mod dirs;
pub mod discovery;
pub mod error;
pub mod host;
pub mod install;
pub mod layout;
pub mod library;
pub mod output;
pub mod wrapper;
