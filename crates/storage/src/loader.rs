//! Bulk import of profiles from a CSV file.
//!
//! The expected header carries at least the columns in
//! [`argo_core::PROFILE_COLUMNS`]; extra columns are ignored.
//!
//! ```text
//! sample_id,latitude,longitude,depth_m,temperature_C,salinity_psu,density_kg_m3,current_speed_m_s
//! 1,10.5,20.25,100,18.2,35.1,1025.9,0.31
//! ```
//!
//! Parsing and validation finish before the store is touched, and the
//! replace itself is one transaction, so a failed load never leaves a
//! partial `profiles` table behind.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use argo_core::{PROFILE_COLUMNS, Profile};
use serde::Serialize;
use thiserror::Error;

use crate::{Storage, StorageError};

/// Error type for load operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file missing or unreadable
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content or a value that does not parse as a number
    #[error("malformed input: {0}")]
    Csv(#[source] csv::Error),

    /// Header lacks required columns
    #[error("missing required column(s): {0}")]
    MissingColumns(String),

    /// A record does not have the same columns as the header
    #[error("record on line {line} has {found} fields, header has {expected}")]
    Schema { line: u64, expected: u64, found: u64 },

    /// Parsed values violate a profile invariant
    #[error("invalid profile: {0}")]
    Validation(String),

    /// The store rejected the replace
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoadError {
    fn from_csv(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = err.kind() {
            return Self::Schema {
                line: pos.as_ref().map_or(0, csv::Position::line),
                expected: *expected_len,
                found: *len,
            };
        }
        Self::Csv(err)
    }

    /// Whether the operator's input file is at fault (as opposed to the store).
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Storage(e) if !e.is_caller_error())
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub db_path: PathBuf,
    pub profiles: usize,
    pub annotations_preserved: u64,
}

/// Parse profiles from any CSV reader.
///
/// # Errors
/// Returns [`LoadError`] for malformed CSV, missing columns or records whose
/// field count differs from the header.
pub fn read_profiles<R: Read>(reader: R) -> Result<Vec<Profile>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(LoadError::from_csv)?.clone();
    let missing: Vec<&str> = PROFILE_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing.join(", ")));
    }

    rdr.deserialize::<Profile>()
        .map(|record| record.map_err(LoadError::from_csv))
        .collect()
}

/// Parse profiles from the CSV file at `path`.
///
/// # Errors
/// See [`read_profiles`]; additionally [`LoadError::Open`] if the file
/// cannot be opened.
pub fn read_profiles_csv(path: &Path) -> Result<Vec<Profile>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    read_profiles(file)
}

/// Reject the whole batch if any row breaks a positional invariant or
/// reuses a `sample_id`.
fn validate_profiles(profiles: &[Profile]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        profile.check_invariants().map_err(LoadError::Validation)?;
        if !seen.insert(profile.sample_id) {
            return Err(LoadError::Validation(format!(
                "sample_id {} appears more than once",
                profile.sample_id
            )));
        }
    }
    Ok(())
}

/// Replace `profiles` with the contents of the CSV at `path` and make sure
/// the annotations schema exists.
///
/// # Errors
/// Returns [`LoadError`] on any input, validation or store failure; the
/// previous `profiles` table is then left unchanged.
pub fn load_csv(storage: &Storage, csv_path: &Path) -> Result<LoadSummary, LoadError> {
    let profiles = read_profiles_csv(csv_path)?;
    validate_profiles(&profiles)?;

    let written = storage.replace_profiles(&profiles)?;
    storage.ensure_annotations_schema()?;
    let annotations_preserved = storage.count_annotations()?;

    tracing::info!(
        csv = %csv_path.display(),
        profiles = written,
        annotations_preserved,
        "profile load complete"
    );

    Ok(LoadSummary {
        db_path: storage.path().to_path_buf(),
        profiles: written,
        annotations_preserved,
    })
}
