use argo_core::{Annotation, NewAnnotation};
use rusqlite::params;

use super::{Storage, get_conn};
use crate::StorageError;

impl Storage {
    /// Append one annotation. `id` and `timestamp` come from the store.
    ///
    /// Does not take the profile table guard: annotations are independent
    /// of `profiles` and `SQLite` appends atomically.
    ///
    /// # Errors
    /// Returns [`StorageError::Validation`] if `user` or `note` is blank or
    /// too long, or a database error if the insert fails.
    pub fn insert_annotation(
        &self,
        sample_id: i64,
        user: &str,
        note: &str,
    ) -> Result<Annotation, StorageError> {
        let input = NewAnnotation::new(sample_id, user, note).normalized()?;
        let conn = get_conn(&self.pool)?;
        let annotation = conn.query_row(
            "INSERT INTO annotations (sample_id, user, note) VALUES (?1, ?2, ?3)
             RETURNING id, sample_id, user, note, timestamp",
            params![input.sample_id, input.user, input.note],
            row_to_annotation,
        )?;
        tracing::debug!(id = annotation.id, sample_id, "annotation saved");
        Ok(annotation)
    }

    /// All annotations for `sample_id`, oldest first.
    ///
    /// An unknown sample id yields an empty vector, not an error.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn query_annotations(&self, sample_id: i64) -> Result<Vec<Annotation>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, sample_id, user, note, timestamp
               FROM annotations WHERE sample_id = ?1 ORDER BY id",
        )?;
        let rows =
            stmt.query_map(params![sample_id], row_to_annotation)?.collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Total number of stored annotations.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn count_annotations(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM annotations", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn row_to_annotation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Annotation> {
    Ok(Annotation {
        id: row.get(0)?,
        sample_id: row.get(1)?,
        user: row.get(2)?,
        note: row.get(3)?,
        timestamp: row.get(4)?,
    })
}
