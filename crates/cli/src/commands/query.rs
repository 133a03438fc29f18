use anyhow::Result;
use argo_core::{NewAnnotation, ProfileFilter};
use argo_service::{AnnotationService, ProfileService};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::open_storage;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn profile_service(db_path: &Path) -> Result<ProfileService> {
    Ok(ProfileService::new(Arc::new(open_storage(db_path)?)))
}

fn annotation_service(db_path: &Path) -> Result<AnnotationService> {
    Ok(AnnotationService::new(Arc::new(open_storage(db_path)?)))
}

pub(crate) fn run_profiles(db_path: &Path, limit: i64) -> Result<()> {
    let rows = profile_service(db_path)?.paginated_profiles(limit)?;
    print_json(&rows)
}

pub(crate) fn run_filter(db_path: &Path, filter: &ProfileFilter) -> Result<()> {
    let rows = profile_service(db_path)?.filter_by(filter)?;
    tracing::info!(matches = rows.len(), "filter applied");
    print_json(&rows)
}

pub(crate) fn run_annotate(db_path: &Path, sample_id: i64, user: String, note: String) -> Result<()> {
    let saved = annotation_service(db_path)?.save(NewAnnotation::new(sample_id, user, note))?;
    print_json(&saved)
}

pub(crate) fn run_annotations(db_path: &Path, sample_id: i64) -> Result<()> {
    let history = annotation_service(db_path)?.history(sample_id)?;
    print_json(&history)
}
