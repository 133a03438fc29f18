use std::sync::Arc;

use argo_core::{Annotation, NewAnnotation};
use argo_storage::Storage;

use crate::ServiceError;

/// Append-only notes attached to profiles.
pub struct AnnotationService {
    storage: Arc<Storage>,
}

impl AnnotationService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Validate and append one annotation.
    ///
    /// The sample id is not checked against `profiles`: annotations may
    /// outlive the profile load they were written against.
    pub fn save(&self, input: NewAnnotation) -> Result<Annotation, ServiceError> {
        let input = input.normalized()?;
        let saved = self.storage.insert_annotation(input.sample_id, &input.user, &input.note)?;
        tracing::info!(id = saved.id, sample_id = saved.sample_id, user = %saved.user, "annotation saved");
        Ok(saved)
    }

    /// Annotation history for one sample, oldest first; empty when none.
    pub fn history(&self, sample_id: i64) -> Result<Vec<Annotation>, ServiceError> {
        Ok(self.storage.query_annotations(sample_id)?)
    }
}
