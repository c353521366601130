use crate::domain::payload::PayloadRecord;
use crate::error::AppError;
use crate::storage::PayloadStorage;

use tokio::sync::RwLock;

/// Keeps records in process memory. Everything is lost on exit.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<Vec<PayloadRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl PayloadStorage for MemoryStorage {
    async fn insert(&self, record: PayloadRecord) -> Result<(), AppError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn find_one(&self) -> Result<PayloadRecord, AppError> {
        self.records
            .read()
            .await
            .first()
            .cloned()
            .ok_or_else(|| AppError::NotFound("payload".to_string()))
    }
}
