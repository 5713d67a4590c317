use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::store::{
    ProfileStore, StoreError, UserRecord, UserUpdate, Users, apply_profile, apply_update,
};

/// All users in one JSON document, rewritten after every change. The
/// in-memory map only moves forward once the rewrite has landed on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    users: Mutex<Users>,
}

impl FileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let users: Users = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Users::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("store file {} not found, starting empty", path.display());
                Users::new()
            }
            Err(e) => return Err(e.into()),
        };
        info!(users = users.len(), "opened store {}", path.display());
        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, users: &Users) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(users)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(users = users.len(), "persisted store {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FileStore {
    fn backend_tag(&self) -> &'static str {
        "file"
    }

    async fn user(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.lock().await;
        let mut next = users.clone();
        next.insert(record.id.clone(), record);
        self.persist(&next).await?;
        *users = next;
        Ok(())
    }

    async fn set_profile(&self, id: &str, content: String) -> Result<UserRecord, StoreError> {
        let mut users = self.users.lock().await;
        let mut next = users.clone();
        let record = apply_profile(&mut next, id, content)?;
        self.persist(&next).await?;
        *users = next;
        Ok(record)
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<UserRecord, StoreError> {
        let mut users = self.users.lock().await;
        let mut next = users.clone();
        let record = apply_update(&mut next, id, update)?;
        self.persist(&next).await?;
        *users = next;
        Ok(record)
    }
}
