//! Durable key-value layer backing all persisted records.
//!
//! Each key maps to one pretty-printed JSON document under the data
//! directory, with an in-memory mirror and a change feed so every consumer
//! of a key observes the latest written value within the session.

use crate::error::CoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, RwLock};

/// Persisted key for the task collection.
pub const TASKS_KEY: &str = "tasks";
/// Persisted key for the notification log.
pub const NOTIFICATIONS_KEY: &str = "notifications";
/// Persisted key for the notification settings record.
pub const NOTIFICATION_SETTINGS_KEY: &str = "notification-settings";
/// Persisted key for the application settings record.
pub const APP_SETTINGS_KEY: &str = "app-settings";
/// Persisted key for the user profile record.
pub const USER_PROFILE_KEY: &str = "user-profile";

/// Emitted on the change feed whenever a key is written or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
}

pub struct Store {
    root: PathBuf,
    mirror: RwLock<HashMap<String, serde_json::Value>>,
    events: broadcast::Sender<StoreEvent>,
}

impl Store {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        let (events, _) = broadcast::channel(64);
        Ok(Self {
            root,
            mirror: RwLock::new(HashMap::new()),
            events,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads a key, returning `default` when the key has never been written
    /// or the stored document no longer deserializes as `T`. The default is
    /// returned without being written back; only explicit `write` calls
    /// touch durable state.
    pub async fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        if let Some(value) = self.mirror.read().await.get(key).cloned() {
            return serde_json::from_value(value).unwrap_or(default);
        }
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => {
                    let parsed = serde_json::from_value(value.clone()).ok();
                    self.mirror.write().await.insert(key.to_string(), value);
                    parsed.unwrap_or(default)
                }
                Err(_) => default,
            },
            Err(_) => default,
        }
    }

    /// Writes a key immediately: durable file, in-memory mirror, and change
    /// feed are all updated before this returns.
    pub async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_value(value)?;
        let text = serde_json::to_string_pretty(&json)?;
        tokio::fs::write(self.key_path(key), text).await?;
        self.mirror.write().await.insert(key.to_string(), json);
        let _ = self.events.send(StoreEvent {
            key: key.to_string(),
        });
        Ok(())
    }

    /// Removes a key entirely. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) -> Result<(), CoreError> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.mirror.write().await.remove(key);
        let _ = self.events.send(StoreEvent {
            key: key.to_string(),
        });
        Ok(())
    }

    /// Subscribes to the change feed. Dependents re-run their derivations
    /// on each emission instead of polling.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
