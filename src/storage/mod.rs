use crate::domain::payload::PayloadRecord;
use crate::error::AppError;

pub mod driver;

type Result<T> = std::result::Result<T, AppError>;

/// Backend holding payload records.
///
/// Implementations are shared by every request, so each call must be safe to
/// run concurrently with any other call. Nothing is retried.
#[async_trait::async_trait]
pub trait PayloadStorage: Send + Sync {
    /// Persist one record as-is.
    async fn insert(&self, record: PayloadRecord) -> Result<()>;

    /// Return one stored record, chosen by the backend's natural scan order.
    ///
    /// Fails with [`AppError::NotFound`] when nothing has been stored yet.
    async fn find_one(&self) -> Result<PayloadRecord>;
}
