//! Per-user records: role, display name and the stored profile blob.

pub mod file;
pub mod memory;

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    General,
    Admin,
    Banned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub show_on_leaderboard: bool,
    #[serde(default)]
    pub profile_content: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role: Role::General,
            show_on_leaderboard: false,
            profile_content: None,
            notes: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub display_name: String,
    pub role: Role,
    pub show_on_leaderboard: bool,
    pub notes: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown user {0}")]
    UnknownUser(String),

    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn user(&self, id: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn insert(&self, record: UserRecord) -> Result<(), StoreError>;

    async fn set_profile(&self, id: &str, content: String) -> Result<UserRecord, StoreError>;

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<UserRecord, StoreError>;
}

pub(crate) type Users = BTreeMap<String, UserRecord>;

pub(crate) fn apply_profile(
    users: &mut Users,
    id: &str,
    content: String,
) -> Result<UserRecord, StoreError> {
    let user = users
        .get_mut(id)
        .ok_or_else(|| StoreError::UnknownUser(id.to_string()))?;
    user.profile_content = Some(content);
    Ok(user.clone())
}

pub(crate) fn apply_update(
    users: &mut Users,
    id: &str,
    update: UserUpdate,
) -> Result<UserRecord, StoreError> {
    let user = users
        .get_mut(id)
        .ok_or_else(|| StoreError::UnknownUser(id.to_string()))?;
    user.display_name = update.display_name;
    user.role = update.role;
    user.show_on_leaderboard = update.show_on_leaderboard;
    user.notes = Some(update.notes);
    Ok(user.clone())
}

pub async fn load_seed(path: &Path) -> Result<Vec<UserRecord>, StoreError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Inserts the records whose id the store does not know yet. Existing users
/// keep their stored state. Returns how many were added.
pub async fn seed_users(
    store: &dyn ProfileStore,
    records: Vec<UserRecord>,
) -> Result<usize, StoreError> {
    let mut added = 0;
    for record in records {
        if store.user(&record.id).await?.is_some() {
            debug!("seed skips existing user {}", record.id);
            continue;
        }
        store.insert(record).await?;
        added += 1;
    }
    Ok(added)
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
