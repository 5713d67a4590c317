use std::sync::Arc;

use tracing::info;

use crate::server::{config::Config, error::AppError};
use crate::store::{FileStore, MemoryStore, ProfileStore, load_seed, seed_users};

pub struct State {
    pub config: Config,
    pub store: Arc<dyn ProfileStore>,
}

impl State {
    pub async fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let store: Arc<dyn ProfileStore> = match &config.store_path {
            Some(path) => Arc::new(FileStore::open(path).await?),
            None => Arc::new(MemoryStore::default()),
        };
        info!("Using {} store", store.backend_tag());

        if let Some(path) = &config.seed_path {
            let records = load_seed(path).await?;
            let added = seed_users(store.as_ref(), records).await?;
            info!("Seeded {added} users from {}", path.display());
        }

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn ProfileStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
