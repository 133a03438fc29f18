//! Single-page PDF report: title, generation time, then a literal field
//! dump of the first [`PDF_ROW_LIMIT`] rows, one line each.

use argo_core::{PDF_ROW_LIMIT, Profile};
use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::ExportError;

/// US letter, in points.
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const TEXT_ORIGIN: (i64, i64) = (40, 750);
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 12;

/// Text lines of the report, in order.
pub fn report_lines(rows: &[Profile], generated_at: NaiveDateTime) -> Vec<String> {
    let mut lines = vec![
        "Ocean Data Export".to_owned(),
        generated_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
        String::new(),
    ];
    lines.extend(rows.iter().take(PDF_ROW_LIMIT).map(|row| {
        serde_json::to_string(row).unwrap_or_else(|_| format!("sample_id {}", row.sample_id))
    }));
    lines
}

/// Render the report for `rows` as PDF bytes.
///
/// # Errors
/// Returns [`ExportError::Pdf`] if the content stream or document cannot be encoded.
pub fn to_pdf(rows: &[Profile], generated_at: NaiveDateTime) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![TEXT_ORIGIN.0.into(), TEXT_ORIGIN.1.into()]),
    ];
    for line in report_lines(rows, generated_at) {
        operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations }.encode().map_err(|e| ExportError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_rows;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_micro_opt(12, 0, 0, 250).unwrap()
    }

    #[test]
    fn header_then_one_line_per_row() {
        let lines = report_lines(&sample_rows(2), noon());
        assert_eq!(lines[0], "Ocean Data Export");
        assert_eq!(lines[1], "2026-03-01 12:00:00.000250");
        assert_eq!(lines[2], "");
        assert_eq!(lines.len(), 5);
        assert!(lines[3].contains("\"sample_id\":1"));
        assert!(lines[4].contains("\"temperature_C\""));
    }

    #[test]
    fn row_dump_is_capped() {
        let lines = report_lines(&sample_rows(50), noon());
        assert_eq!(lines.len(), 3 + PDF_ROW_LIMIT);
        assert!(lines.last().unwrap().contains("\"sample_id\":20"));
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = to_pdf(&sample_rows(3), noon()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }
}
