use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use argo_export::ExportFormat;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_result;
use crate::query_types::FilterQuery;

/// Download the currently filtered rows as a spreadsheet or PDF.
pub async fn export_profiles(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let format: ExportFormat = format.parse().map_err(ApiError::NotFound)?;
    let Query(query) = query?;
    let filter = query.into_filter();
    let service = Arc::clone(&state.profile_service);

    let rows = blocking_result(move || service.filter_by(&filter)).await?;
    let generated_at = chrono::Local::now().naive_local();
    let bytes = blocking_result(move || format.render(&rows, generated_at)).await?;

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_owned()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ),
    ];
    Ok((headers, bytes))
}
