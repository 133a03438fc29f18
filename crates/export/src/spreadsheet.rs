//! Excel workbook export: one sheet, header row plus one row per profile.

use argo_core::{PROFILE_COLUMNS, Profile};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

const SHEET_NAME: &str = "profiles";

/// Serialize `rows` into an `.xlsx` byte stream.
///
/// # Errors
/// Returns [`XlsxError`] if the workbook cannot be assembled.
pub fn to_xlsx(rows: &[Profile]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    for (col, name) in (0u16..).zip(PROFILE_COLUMNS) {
        worksheet.write_string_with_format(0, col, name, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (row, profile) in (1u32..).zip(rows) {
        // Sample ids are small integers, exact in f64.
        worksheet.write_number(row, 0, profile.sample_id as f64)?;
        for (col, value) in (1u16..).zip(profile.measurements()) {
            worksheet.write_number(row, col, value)?;
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_rows;

    #[test]
    fn produces_zip_container() {
        let bytes = to_xlsx(&sample_rows(3)).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_selection_still_yields_workbook() {
        let bytes = to_xlsx(&[]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
