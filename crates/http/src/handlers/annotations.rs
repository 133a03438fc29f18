use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use argo_core::{Annotation, NewAnnotation};

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};

pub async fn save_annotation(
    State(state): State<Arc<AppState>>,
    req: Result<Json<NewAnnotation>, JsonRejection>,
) -> Result<(StatusCode, Json<Annotation>), ApiError> {
    let Json(req) = req?;
    let service = Arc::clone(&state.annotation_service);
    let saved = blocking_result(move || service.save(req)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn annotation_history(
    State(state): State<Arc<AppState>>,
    sample_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Annotation>>, ApiError> {
    let Path(sample_id) = sample_id?;
    let service = Arc::clone(&state.annotation_service);
    blocking_json(move || service.history(sample_id)).await
}
