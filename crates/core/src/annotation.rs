use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{AnnotationError, MAX_NOTE_LEN, MAX_USER_LEN};

/// A user-authored note attached to a profile by its sample id.
///
/// `id` and `timestamp` are assigned by the store; the row never changes
/// after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: i64,
    pub sample_id: i64,
    pub user: String,
    pub note: String,
    pub timestamp: NaiveDateTime,
}

/// Caller-supplied part of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnnotation {
    pub sample_id: i64,
    pub user: String,
    pub note: String,
}

impl NewAnnotation {
    pub fn new(sample_id: i64, user: impl Into<String>, note: impl Into<String>) -> Self {
        Self { sample_id, user: user.into(), note: note.into() }
    }

    /// Trims both text fields and enforces non-empty and length caps.
    ///
    /// # Errors
    /// Returns [`AnnotationError`] if either field is blank or too long.
    pub fn normalized(self) -> Result<Self, AnnotationError> {
        let user = normalize_field("user", &self.user, MAX_USER_LEN)?;
        let note = normalize_field("note", &self.note, MAX_NOTE_LEN)?;
        Ok(Self { sample_id: self.sample_id, user, note })
    }
}

fn normalize_field(field: &'static str, value: &str, max: usize) -> Result<String, AnnotationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AnnotationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(AnnotationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}
