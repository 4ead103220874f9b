use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

pub const DATABASE_FILE: &str = "youth_wellness.db";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ChatBackend {
    /// Offline replies; nothing leaves the machine.
    Scripted,
    /// A hosted text-generation endpoint.
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatSettings {
    pub backend: ChatBackend,
    pub endpoint: Option<String>,
    /// Environment variable holding the bearer token for `endpoint`.
    pub token_env: String,
    pub max_length: u32,
    pub top_k: u32,
    pub do_sample: bool,
    pub timeout_secs: u64,
    /// Messages shown when replaying the conversation.
    pub history_limit: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            backend: ChatBackend::Scripted,
            endpoint: None,
            token_env: "YOUTHWELL_MODEL_TOKEN".into(),
            max_length: 80,
            top_k: 50,
            do_sample: true,
            timeout_secs: 60,
            history_limit: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub chat: ChatSettings,
    /// Entries shown by the "recent" listings.
    pub recent_limit: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            chat: ChatSettings::default(),
            recent_limit: 8,
        }
    }
}

/// Picks the data directory: an explicit override, else the platform data dir.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|dir| dir.join("youthwell"))
            .ok_or_else(|| anyhow!("could not determine a data directory; pass --data-dir")),
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    /// Loads settings from `path`. A missing or unreadable file yields defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!(
                        "Ignoring malformed settings at {}: {err}",
                        path.display()
                    );
                    UserSettings::default()
                }
            }
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> UserSettings {
        self.read().clone()
    }

    pub fn chat(&self) -> ChatSettings {
        self.read().chat.clone()
    }

    pub fn recent_limit(&self) -> usize {
        self.read().recent_limit
    }

    pub fn update_chat(&self, settings: ChatSettings) -> Result<()> {
        let mut guard = self.write();
        guard.chat = settings;
        self.persist(&guard)
    }

    pub fn update_recent_limit(&self, limit: usize) -> Result<()> {
        let mut guard = self.write();
        guard.recent_limit = limit;
        self.persist(&guard)
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(store.snapshot(), UserSettings::default());
        assert_eq!(store.chat().backend, ChatBackend::Scripted);
    }

    #[test]
    fn test_updates_persist_across_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let store = SettingsStore::new(path.clone()).unwrap();
        let chat = ChatSettings {
            backend: ChatBackend::Http,
            endpoint: Some("http://localhost:8080/generate".into()),
            ..ChatSettings::default()
        };
        store.update_chat(chat.clone()).unwrap();
        store.update_recent_limit(3).unwrap();

        let reloaded = SettingsStore::new(path).unwrap();
        assert_eq!(reloaded.chat(), chat);
        assert_eq!(reloaded.recent_limit(), 3);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "chat": { "topK": 10 } }"#).unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.chat().top_k, 10);
        assert_eq!(store.chat().max_length, 80);
        assert_eq!(store.recent_limit(), 8);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.snapshot(), UserSettings::default());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/youthwell-test");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
