//! Spreadsheet Export
//!
//! Builds the downloadable `query_results.xlsx` artifact from the
//! current result rows. Column order follows the first row; values
//! missing from later rows are left blank.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use opd_queries::spec::Row;

/// Fixed artifact filename
pub const EXPORT_FILENAME: &str = "query_results.xlsx";
/// Spreadsheet MIME type for the artifact
pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// Name of the single result sheet
pub const SHEET_NAME: &str = "Results";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// A finished export: filename, MIME type, and file bytes
pub struct ExportArtifact {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Build the spreadsheet artifact; no rows means no artifact
pub fn export_rows(rows: &[Row]) -> ExportResult<Option<ExportArtifact>> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let headers: Vec<&String> = first.keys().collect();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let out_row = (i + 1) as u32;
        for (col, header) in headers.iter().enumerate() {
            let col = col as u16;
            match row.get(*header) {
                Some(Value::String(s)) => worksheet.write(out_row, col, s.as_str())?,
                Some(Value::Number(n)) => match n.as_f64() {
                    Some(f) => worksheet.write(out_row, col, f)?,
                    None => worksheet.write(out_row, col, n.to_string())?,
                },
                Some(Value::Bool(b)) => worksheet.write(out_row, col, *b)?,
                Some(Value::Null) | None => continue,
                Some(other) => worksheet.write(out_row, col, other.to_string())?,
            };
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(rows = rows.len(), size = bytes.len(), "Export built");

    Ok(Some(ExportArtifact {
        filename: EXPORT_FILENAME,
        content_type: EXPORT_CONTENT_TYPE,
        bytes,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        let mut row = Row::new();
        for (k, v) in pairs {
            row.insert((*k).to_string(), v.clone());
        }
        row
    }

    #[test]
    fn test_empty_rows_export_nothing() {
        assert!(export_rows(&[]).unwrap().is_none());
    }

    #[test]
    fn test_export_builds_xlsx_artifact() {
        let rows = vec![
            row(&[
                ("userid", json!("OP-1")),
                ("scan_count", json!(12)),
                ("location", json!("Pune")),
            ]),
            row(&[("userid", json!("OP-2")), ("scan_count", json!(3))]),
        ];

        let artifact = export_rows(&rows).unwrap().unwrap();

        assert_eq!(artifact.filename, "query_results.xlsx");
        assert_eq!(
            artifact.content_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        // xlsx files are zip archives
        assert_eq!(&artifact.bytes[..2], b"PK");
    }

    #[test]
    fn test_export_tolerates_mixed_and_missing_values() {
        let rows = vec![
            row(&[
                ("userid", json!("OP-1")),
                ("remarks", json!(null)),
                ("active", json!(true)),
            ]),
            row(&[("userid", json!("OP-2"))]),
        ];

        assert!(export_rows(&rows).unwrap().is_some());
    }
}
