//! # opd-export
//!
//! Results presentation helpers for Operator Dashboard RS: page
//! arithmetic over result rows, the spreadsheet export artifact, and
//! the query-text clipboard.
//!
//! ## Structure
//!
//! - `paginate` - 1-based page slicing over result rows
//! - `xlsx` - The `query_results.xlsx` export artifact
//! - `clipboard` - Injected sink for copied query text

pub mod clipboard;
pub mod paginate;
pub mod xlsx;

// Re-exports for convenience
pub use clipboard::{copy_query_text, Clipboard, MemoryClipboard};
pub use paginate::{page_count, page_rows, paginate, Page};
pub use xlsx::{
    export_rows, ExportArtifact, ExportError, ExportResult, EXPORT_CONTENT_TYPE, EXPORT_FILENAME,
    SHEET_NAME,
};
