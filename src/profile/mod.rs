//! Profile data presented by the shell
//!
//! The profile is read-only for the lifetime of a session. A built-in record
//! is used unless a TOML profile is configured.

mod builtin;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read profile: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse profile: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Biographical, skill and project data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Used for the neofetch "uptime"
    pub birthdate: NaiveDate,
    /// Username shown in the prompt and `pwd`
    pub shell_user: String,
    pub host: String,
    pub summary: String,

    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,

    /// Slug of the project directory holding the hidden key file
    #[serde(default = "default_key_project")]
    pub key_project: String,
}

fn default_key_project() -> String {
    "depoindex".to_string()
}

/// One skill category, e.g. `languages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Directory name and fallback label
    pub key: String,
    /// Heading used by the `skills` command
    #[serde(default)]
    pub label: Option<String>,
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        builtin::profile()
    }
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        if !path.exists() {
            return Err(ProfileError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from `path` when given, otherwise use the built-in record
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ProfileError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Directory-safe name: lowercase, each run outside `[a-z0-9]` becomes `-`
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}
