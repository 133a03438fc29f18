//! HTTP API server for the ARGO data browser.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use argo_service::{AnnotationService, ProfileService};
use argo_storage::Storage;

pub use query_types::{FilterQuery, ProfilesQuery};
pub use response_types::MessageResponse;

/// Shared application state for all HTTP handlers.
///
/// Services hold the pooled store; each request checks out its own
/// connection, so one failed request never affects another.
pub struct AppState {
    /// Filtered and paginated profile reads
    pub profile_service: Arc<ProfileService>,
    /// Annotation writes and history
    pub annotation_service: Arc<AnnotationService>,
}

impl AppState {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            profile_service: Arc::new(ProfileService::new(Arc::clone(&storage))),
            annotation_service: Arc::new(AnnotationService::new(storage)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/profiles", get(handlers::profiles::list_profiles))
        .route("/api/profiles/filter", get(handlers::profiles::filter_profiles))
        .route("/api/profiles/bounds", get(handlers::profiles::profile_bounds))
        .route("/api/map", get(handlers::profiles::map_features))
        .route("/api/annotations", post(handlers::annotations::save_annotation))
        .route("/api/annotations/{sample_id}", get(handlers::annotations::annotation_history))
        .route("/api/export/{format}", get(handlers::export::export_profiles))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn home() -> Json<MessageResponse> {
    Json(MessageResponse { message: "ARGO API running!" })
}

async fn health() -> &'static str {
    "ok"
}
