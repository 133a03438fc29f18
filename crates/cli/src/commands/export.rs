use anyhow::{Context, Result};
use argo_core::ProfileFilter;
use argo_export::ExportFormat;
use argo_service::ProfileService;
use std::path::Path;
use std::sync::Arc;

use crate::{ensure_parent_dir, open_storage};

pub(crate) fn run(db_path: &Path, format: ExportFormat, out: &Path, filter: &ProfileFilter) -> Result<()> {
    let service = ProfileService::new(Arc::new(open_storage(db_path)?));
    let rows = service.filter_by(filter)?;

    let generated_at = chrono::Local::now().naive_local();
    let bytes = format.render(&rows, generated_at)?;

    ensure_parent_dir(out)?;
    std::fs::write(out, &bytes).with_context(|| format!("failed to write {}", out.display()))?;

    println!("Exported {} rows to {} ({} bytes)", rows.len(), out.display(), bytes.len());
    Ok(())
}
