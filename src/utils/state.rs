use crate::config::{Config, StorageType};
use crate::error::AppError;
use crate::storage::PayloadStorage;
use crate::storage::driver::memory::MemoryStorage;
use crate::storage::driver::mongo::MongoStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn PayloadStorage>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Opens the configured storage backend. Called once at startup; the
    /// resulting handle is never replaced.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let storage: Arc<dyn PayloadStorage> = match config.storage_typ {
            StorageType::Mongo => Arc::new(MongoStorage::connect(&config.store).await?),
            StorageType::Memory => Arc::new(MemoryStorage::new()),
        };
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn PayloadStorage>) -> Self {
        AppState {
            storage,
            config: Arc::new(config),
        }
    }
}
