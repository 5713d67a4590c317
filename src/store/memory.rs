use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::store::{
    ProfileStore, StoreError, UserRecord, UserUpdate, Users, apply_profile, apply_update,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Users>,
}

impl MemoryStore {
    pub fn with_users(records: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            users: Mutex::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn user(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        self.users.lock().await.insert(record.id.clone(), record);
        Ok(())
    }

    async fn set_profile(&self, id: &str, content: String) -> Result<UserRecord, StoreError> {
        apply_profile(&mut *self.users.lock().await, id, content)
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<UserRecord, StoreError> {
        apply_update(&mut *self.users.lock().await, id, update)
    }
}
