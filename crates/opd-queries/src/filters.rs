//! Filter Rules
//!
//! A rule is a single field/operator/value condition. Rules arrive from
//! the editing surface in a partially-filled state; only well-formed
//! rules are ever serialized toward the query endpoint.

use serde::{Deserialize, Serialize};

use crate::fields::InputType;

/// Filter operators that can be applied to values
///
/// Wire strings follow the editing widget's conventions and pass through
/// to the query endpoint verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    /// Equals (=)
    #[serde(rename = "=")]
    Equals,
    /// Not equals (!=)
    #[serde(rename = "!=")]
    NotEquals,
    /// Substring match
    #[serde(rename = "contains")]
    Contains,
    /// Prefix match
    #[serde(rename = "beginsWith")]
    BeginsWith,
    /// Suffix match
    #[serde(rename = "endsWith")]
    EndsWith,
    /// Greater than (>)
    #[serde(rename = ">")]
    GreaterThan,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    /// Less than (<)
    #[serde(rename = "<")]
    LessThan,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    LessThanOrEqual,
}

impl FilterOperator {
    /// Parse operator from its wire string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "=" => Some(Self::Equals),
            "!=" => Some(Self::NotEquals),
            "contains" => Some(Self::Contains),
            "beginsWith" => Some(Self::BeginsWith),
            "endsWith" => Some(Self::EndsWith),
            ">" => Some(Self::GreaterThan),
            ">=" => Some(Self::GreaterThanOrEqual),
            "<" => Some(Self::LessThan),
            "<=" => Some(Self::LessThanOrEqual),
            _ => None,
        }
    }

    /// The wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Contains => "contains",
            Self::BeginsWith => "beginsWith",
            Self::EndsWith => "endsWith",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
        }
    }

    /// Operators that make sense for a field of the given type.
    ///
    /// Substring comparators are text-only; ordering comparators apply to
    /// numbers and dates. Values are never coerced to fit an operator.
    pub fn allowed_for(input_type: InputType) -> &'static [FilterOperator] {
        match input_type {
            InputType::Text => &[
                Self::Equals,
                Self::NotEquals,
                Self::Contains,
                Self::BeginsWith,
                Self::EndsWith,
            ],
            InputType::Number | InputType::Date => &[
                Self::Equals,
                Self::NotEquals,
                Self::GreaterThan,
                Self::GreaterThanOrEqual,
                Self::LessThan,
                Self::LessThanOrEqual,
            ],
        }
    }
}

/// A filter value: string or numeric, as produced by the editing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    String(String),
    Number(serde_json::Number),
}

impl FilterValue {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn number(n: i64) -> Self {
        Self::Number(n.into())
    }

    /// Empty-string values never constrain anything
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }
}

/// A single filter condition
///
/// Fields are optional because the editor hands over rules mid-edit;
/// [`FilterRule::is_well_formed`] decides what reaches the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterRule {
    /// The field being filtered
    #[serde(default)]
    pub field: String,
    /// The operator to apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<FilterOperator>,
    /// The value to compare against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
}

impl FilterRule {
    /// Create a complete rule
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            operator: Some(operator),
            value: Some(value),
        }
    }

    /// Create an equals rule
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Equals, FilterValue::string(value))
    }

    /// Create a contains rule
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Contains, FilterValue::string(value))
    }

    /// A rule is well-formed only when field, operator, and a non-empty
    /// value are all present. Anything else is silently excluded from
    /// outgoing requests, never erased from the editor.
    pub fn is_well_formed(&self) -> bool {
        !self.field.is_empty()
            && self.operator.is_some()
            && self.value.as_ref().map(|v| !v.is_empty()).unwrap_or(false)
    }
}
