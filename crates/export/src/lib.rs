//! Export adapters for filtered profiles.
//!
//! Each adapter takes the already-filtered rows and returns owned bytes or
//! JSON; none of them touch the store.

pub mod map;
pub mod pdf;
pub mod spreadsheet;

use argo_core::Profile;
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet export failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("pdf export failed: {0}")]
    Pdf(String),
}

/// Downloadable export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Xlsx => "ocean_filtered.xlsx",
            Self::Pdf => "ocean_filtered.pdf",
        }
    }

    /// Render `rows` in this format. `generated_at` only appears in the PDF header.
    ///
    /// # Errors
    /// Returns [`ExportError`] if the underlying writer fails.
    pub fn render(self, rows: &[Profile], generated_at: NaiveDateTime) -> Result<Vec<u8>, ExportError> {
        let bytes = match self {
            Self::Xlsx => spreadsheet::to_xlsx(rows)?,
            Self::Pdf => pdf::to_pdf(rows, generated_at)?,
        };
        tracing::debug!(format = ?self, rows = rows.len(), bytes = bytes.len(), "export rendered");
        Ok(bytes)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("unknown export format '{s}' (expected xlsx or pdf)")),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_rows(n: i64) -> Vec<Profile> {
    (1..=n)
        .map(|i| Profile {
            sample_id: i,
            latitude: i as f64,
            longitude: -(i as f64),
            depth_m: i as f64 * 25.0,
            temperature_c: 20.0 - i as f64 * 0.5,
            salinity_psu: 35.0,
            density_kg_m3: 1025.0,
            current_speed_m_s: 0.1 * i as f64,
        })
        .collect()
}
