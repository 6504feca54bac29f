//! Query Wire Contract
//!
//! The request payload sent to the remote query endpoint and the
//! response payload it returns.

use serde::{Deserialize, Serialize};

use crate::filters::FilterRule;
use crate::sorts::SortDirection;

/// A result row: field name to scalar value, in server order
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The request payload for a query run
///
/// Rebuilt from the state store on every run; never persisted
/// server-side. `filters` carries only well-formed top-level leaf
/// rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpecification {
    /// Selected field identifiers, order = display order
    pub fields: Vec<String>,
    /// Well-formed leaf rules
    pub filters: Vec<FilterRule>,
    /// Field to sort by
    pub sort_by: String,
    /// Sort direction
    pub sort_order: SortDirection,
    /// Maximum number of rows requested
    pub limit: u32,
}

/// The response payload of a query run
///
/// Parsing is total: a response missing either key still deserializes,
/// with empty defaults, so rendering never fails on shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// Generated query text, display only, never re-parsed
    #[serde(default)]
    pub query: String,
    /// Result rows, shaped entirely by the server
    #[serde(default)]
    pub results: Vec<Row>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
