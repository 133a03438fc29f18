use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use argo_core::{Profile, ProfileBounds};

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::{FilterQuery, ProfilesQuery};

pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProfilesQuery>, QueryRejection>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let Query(query) = query?;
    let service = Arc::clone(&state.profile_service);
    blocking_json(move || service.paginated_profiles(query.limit)).await
}

pub async fn filter_profiles(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter();
    let service = Arc::clone(&state.profile_service);
    blocking_json(move || service.filter_by(&filter)).await
}

pub async fn profile_bounds(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProfileBounds>, ApiError> {
    let service = Arc::clone(&state.profile_service);
    blocking_json(move || service.bounds()).await
}

pub async fn map_features(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter();
    let service = Arc::clone(&state.profile_service);
    blocking_json(move || service.filter_by(&filter).map(|rows| argo_export::map::to_geojson(&rows)))
        .await
}
