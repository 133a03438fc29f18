use anyhow::{Result, anyhow};
use argo_storage::load_csv;
use std::path::Path;

use crate::open_storage;

pub(crate) fn run(db_path: &Path, csv_path: &Path) -> Result<()> {
    let storage = open_storage(db_path)?;
    let summary = load_csv(&storage, csv_path).map_err(|e| {
        if e.is_input_error() {
            anyhow!("rejected input file {}: {e}", csv_path.display())
        } else {
            anyhow!("store failure while loading {}: {e}", csv_path.display())
        }
    })?;

    let resolved = std::fs::canonicalize(&summary.db_path).unwrap_or(summary.db_path);
    println!("[DB] Profiles stored and annotations table created at {}", resolved.display());
    println!(
        "{} profiles loaded, {} annotations preserved",
        summary.profiles, summary.annotations_preserved
    );
    Ok(())
}
