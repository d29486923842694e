//! User-facing command errors
//!
//! The `Display` text of each variant is the exact line shown to the user.
//! None of these abort a session; the dispatcher prints them and moves on.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("bash: cd: {0}: No such file or directory")]
    CdNotFound(String),

    #[error("ls: cannot access '{0}': No such file or directory")]
    LsNotFound(String),

    #[error("tree: '{0}' not found")]
    TreeNotFound(String),

    #[error("cat: {0}: No such file or directory")]
    CatNotFound(String),

    #[error("cat: {0}: Is a directory")]
    CatIsDirectory(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("Key not yet discovered.")]
    KeyNotDiscovered,

    #[error("Unknown hidden theme: {0}")]
    UnknownHiddenTheme(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
