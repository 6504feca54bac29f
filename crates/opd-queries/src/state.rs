//! Query State Store
//!
//! Holds the mutable query-composition state: selected fields, the rule
//! group under edit, sort, limit, and the last successful result. All
//! transitions are synchronous and side-effect free; persistence and
//! network live elsewhere.

use serde::{Deserialize, Serialize};

use crate::fields::{self, names};
use crate::group::RuleGroup;
use crate::sorts::SortDirection;
use crate::spec::{QueryResult, QuerySpecification, Row};

/// Default sort field
pub const DEFAULT_SORT_FIELD: &str = names::USERID;
/// Default result limit
pub const DEFAULT_LIMIT: u32 = 100;

/// A saved snapshot of the composition state
///
/// Written on explicit save only, overwritten without versioning, and
/// applied back atomically. Unknown field identifiers survive the round
/// trip; catalog-driven rendering skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQueryDefinition {
    pub selected_fields: Vec<String>,
    pub rule_group: RuleGroup,
    pub sort_by: String,
    pub sort_order: SortDirection,
    pub limit: u32,
}

/// The mutable query-composition state
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Selected field identifiers, caller order = display order
    pub selected_fields: Vec<String>,
    /// The rule group under edit
    pub rule_group: RuleGroup,
    /// Field to sort by
    pub sort_by: String,
    /// Sort direction
    pub sort_order: SortDirection,
    /// Result limit
    pub limit: u32,
    /// Generated query text from the last successful run
    pub query_text: String,
    /// Rows from the last successful run
    pub rows: Vec<Row>,
    /// Current page of the result table, 1-based
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            selected_fields: fields::field_names(),
            rule_group: RuleGroup::new(),
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortDirection::Asc,
            limit: DEFAULT_LIMIT,
            query_text: String::new(),
            rows: vec![],
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every piece of state to its default and clear the stored
    /// query text and rows
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the selected fields, dropping identifiers not in the
    /// catalog while preserving caller order
    pub fn set_selected_fields(&mut self, list: Vec<String>) {
        self.selected_fields = list
            .into_iter()
            .filter(|name| fields::is_known_field(name))
            .collect();
    }

    /// Selected fields that exist in the catalog, for rendering.
    ///
    /// A loaded definition may reference fields that are no longer
    /// valid; they stay in state but never reach a field list.
    pub fn known_selected_fields(&self) -> Vec<&str> {
        self.selected_fields
            .iter()
            .filter(|name| fields::is_known_field(name))
            .map(|name| name.as_str())
            .collect()
    }

    /// Store a successful run's result, replacing the previous one and
    /// snapping the table back to the first page
    pub fn apply_result(&mut self, result: QueryResult) {
        self.query_text = result.query;
        self.rows = result.results;
        self.current_page = 1;
    }

    /// Build the wire payload from the current state.
    ///
    /// Malformed rules are dropped silently, unknown selected fields are
    /// excluded, nested groups stay client-side.
    pub fn to_specification(&self) -> QuerySpecification {
        QuerySpecification {
            fields: self
                .known_selected_fields()
                .into_iter()
                .map(String::from)
                .collect(),
            filters: self.rule_group.flatten_well_formed(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            limit: self.limit,
        }
    }

    /// Snapshot the composition state for an explicit save
    pub fn snapshot(&self) -> SavedQueryDefinition {
        SavedQueryDefinition {
            selected_fields: self.selected_fields.clone(),
            rule_group: self.rule_group.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            limit: self.limit,
        }
    }

    /// Apply a saved definition, replacing all five composition fields
    /// atomically. The last run's query text and rows are untouched.
    pub fn restore(&mut self, def: SavedQueryDefinition) {
        self.selected_fields = def.selected_fields;
        self.rule_group = def.rule_group;
        self.sort_by = def.sort_by;
        self.sort_order = def.sort_order;
        self.limit = def.limit;
    }
}
