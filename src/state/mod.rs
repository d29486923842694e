//! Persisted shell state
//!
//! Only two values outlive a session: the chosen theme name and whether the
//! hidden theme has been unlocked. They are stored as plain key/value pairs
//! (`terminal-theme`, `uv-unlocked`) with the flag written as `"1"`/`"0"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read state: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse state: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize state: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Values persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(
        rename = "terminal-theme",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<String>,

    #[serde(rename = "uv-unlocked", default, with = "flag_string")]
    pub unlocked: bool,
}

mod flag_string {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw == "1")
    }
}

/// Load/save capability for persisted state
pub trait StateStore {
    fn load(&self) -> Result<PersistedState, StateError>;
    fn save(&self, state: &PersistedState) -> Result<(), StateError>;
}

/// TOML file backed store
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default state file location
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfolio")
            .join("state.toml")
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<PersistedState, StateError> {
        if !self.path.exists() {
            return Ok(PersistedState::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-process store; clones share the same slot
#[derive(Clone, Default)]
pub struct MemoryStateStore {
    inner: Rc<RefCell<PersistedState>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    pub fn snapshot(&self) -> PersistedState {
        self.inner.borrow().clone()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<PersistedState, StateError> {
        Ok(self.inner.borrow().clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateError> {
        *self.inner.borrow_mut() = state.clone();
        Ok(())
    }
}

/// Load state, treating any failure as a fresh start
pub fn load_or_default(store: &dyn StateStore) -> PersistedState {
    match store.load() {
        Ok(state) => state,
        Err(e) => {
            warn!("Ignoring unreadable shell state: {}", e);
            PersistedState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.toml"));
        assert_eq!(store.load().unwrap(), PersistedState::default());
    }

    #[test]
    fn test_file_roundtrip_uses_flag_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");
        let store = FileStateStore::new(path.clone());

        let state = PersistedState {
            theme: Some("matrix".to_string()),
            unlocked: true,
        };
        store.save(&state).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("terminal-theme = \"matrix\""));
        assert!(raw.contains("uv-unlocked = \"1\""));
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "terminal-theme = [").unwrap();
        let store = FileStateStore::new(path);

        assert!(store.load().is_err());
        assert_eq!(load_or_default(&store), PersistedState::default());
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let store = MemoryStateStore::new();
        let handle = store.clone();
        store
            .save(&PersistedState {
                theme: Some("mono".to_string()),
                unlocked: false,
            })
            .unwrap();
        assert_eq!(handle.snapshot().theme.as_deref(), Some("mono"));
    }
}
