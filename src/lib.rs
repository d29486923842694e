//! termfolio - a developer portfolio presented as a simulated terminal
//!
//! Visitors type shell-like commands against a read-only virtual filesystem
//! built from profile data and get resume sections, ASCII art and small
//! amusements back as text with embedded ANSI codes.
//!
//! ## Key Features
//!
//! - **Virtual Filesystem**: `ls`, `cd`, `tree`, `cat` over a tree built from the profile
//! - **Command Table**: resume sections, `neofetch`, `8ball`, `date` and friends
//! - **Themes**: six themes with persisted selection, one gated behind a hidden key file
//! - **ANSI Rendering**: SGR codes split into styled spans that follow the active theme

pub mod ansi;
pub mod assets;
pub mod commands;
pub mod config;
pub mod fs;
pub mod profile;
pub mod shell;
pub mod state;
pub mod theme;
pub mod tui;

pub use config::{Config, ConfigBuilder, ConfigError};
pub use profile::{Profile, ProfileError};
pub use shell::{Execution, Shell, ShellError};
pub use state::{FileStateStore, MemoryStateStore, PersistedState, StateStore};
pub use theme::{ThemeEngine, ThemeName};
