//! # opd-queries
//!
//! Query composition layer for Operator Dashboard RS.
//!
//! This crate implements the client side of the ad-hoc query feature:
//! the field catalog, filter rules and rule groups, the composition
//! state store, and the wire contract for the remote query endpoint.
//!
//! ## Structure
//!
//! - `fields` - The server-agreed catalog of queryable columns
//! - `filters` - Filter rules and operators
//! - `group` - Recursive AND/OR rule groups
//! - `sorts` - Sort direction
//! - `spec` - Request/response wire payloads
//! - `state` - The mutable composition state store
//!
//! ## Example
//!
//! ```
//! use opd_queries::filters::FilterRule;
//! use opd_queries::state::QueryState;
//!
//! let mut state = QueryState::new();
//! state.set_selected_fields(vec!["userid".into(), "location".into()]);
//! state.rule_group.add_rule(FilterRule::equals("location", "Pune"));
//!
//! let spec = state.to_specification();
//! assert_eq!(spec.fields, vec!["userid", "location"]);
//! assert_eq!(spec.filters.len(), 1);
//! ```

pub mod fields;
pub mod filters;
pub mod group;
pub mod sorts;
pub mod spec;
pub mod state;

// Re-exports for convenience
pub use fields::{FieldDescriptor, InputType};
pub use filters::{FilterOperator, FilterRule, FilterValue};
pub use group::{Combinator, RuleGroup, RuleNode};
pub use sorts::SortDirection;
pub use spec::{QueryResult, QuerySpecification, Row};
pub use state::{QueryState, SavedQueryDefinition};
