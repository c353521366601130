use crate::domain::payload::PayloadRecord;
use crate::error::AppError;
use crate::utils::state::AppState;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

/// POST /save
pub async fn save_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    // The whole body is buffered; there is no size cap.
    let payload = to_bytes(request.into_body(), usize::MAX).await?;
    tracing::debug!(
        size = payload.len(),
        collection = %state.config.store.collection,
        "saving payload"
    );

    state.storage.insert(PayloadRecord::new(payload)).await?;
    Ok(StatusCode::OK)
}

/// GET /read
pub async fn read_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = state.storage.find_one().await?.into_bytes();
    data.push(b'\n');

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        data,
    ))
}
