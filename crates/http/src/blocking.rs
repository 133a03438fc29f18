//! Helpers for running blocking store calls in async handlers.
//!
//! Spawns the closure on the blocking pool, turns join failures into
//! `ApiError::Internal` and converts the closure's own error.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure and wraps its value in `Json`.
///
/// # Example
/// ```ignore
/// pub async fn profile_bounds(
///     State(state): State<Arc<AppState>>,
/// ) -> Result<Json<ProfileBounds>, ApiError> {
///     let service = Arc::clone(&state.profile_service);
///     blocking_json(move || service.bounds()).await
/// }
/// ```
pub async fn blocking_json<T, E, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static + Serialize,
    E: Into<ApiError> + Send + 'static,
{
    blocking_result(f).await.map(Json)
}

/// Runs a blocking closure and returns its raw value.
pub async fn blocking_result<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task failed: {e}")))?
        .map_err(Into::into)
}
