//! Rule Groups
//!
//! A rule group combines rules (and nested groups) with a boolean
//! combinator. The JSON shape produced by the editing widget is
//! untagged rule-or-group; internally the two variants are explicit so
//! group logic is testable without any UI harness.

use serde::{Deserialize, Serialize};

use crate::filters::{FilterOperator, FilterRule, FilterValue};

/// Boolean combinator for a rule group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// A node in a rule tree: either a leaf rule or a nested group
///
/// Deserialization tries the group shape first; a leaf rule has no
/// `combinator`/`rules` keys so it cannot be mistaken for a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleNode {
    Group(RuleGroup),
    Rule(FilterRule),
}

/// An ordered, recursively nestable collection of rules
///
/// Invariant: a group with zero rules contributes no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    pub combinator: Combinator,
    pub rules: Vec<RuleNode>,
}

impl Default for RuleGroup {
    fn default() -> Self {
        Self {
            combinator: Combinator::And,
            rules: vec![],
        }
    }
}

impl RuleGroup {
    /// Create an empty AND group
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group with the given combinator
    pub fn with_combinator(combinator: Combinator) -> Self {
        Self {
            combinator,
            rules: vec![],
        }
    }

    /// Append a leaf rule
    pub fn add_rule(&mut self, rule: FilterRule) -> &mut Self {
        self.rules.push(RuleNode::Rule(rule));
        self
    }

    /// Append a nested group
    pub fn add_group(&mut self, group: RuleGroup) -> &mut Self {
        self.rules.push(RuleNode::Group(group));
        self
    }

    /// Append a leaf rule (builder pattern)
    pub fn with_rule(mut self, rule: FilterRule) -> Self {
        self.rules.push(RuleNode::Rule(rule));
        self
    }

    /// Append a nested group (builder pattern)
    pub fn with_group(mut self, group: RuleGroup) -> Self {
        self.rules.push(RuleNode::Group(group));
        self
    }

    /// Remove the node at `index`; out-of-range removals are a no-op
    pub fn remove_rule(&mut self, index: usize) {
        if index < self.rules.len() {
            self.rules.remove(index);
        }
    }

    /// Update the leaf rule at `index` in place. Nested groups and
    /// out-of-range indexes are left untouched.
    pub fn update_rule(
        &mut self,
        index: usize,
        field: Option<String>,
        operator: Option<FilterOperator>,
        value: Option<FilterValue>,
    ) {
        if let Some(RuleNode::Rule(rule)) = self.rules.get_mut(index) {
            if let Some(field) = field {
                rule.field = field;
            }
            if let Some(operator) = operator {
                rule.operator = Some(operator);
            }
            if let Some(value) = value {
                rule.value = Some(value);
            }
        }
    }

    pub fn set_combinator(&mut self, combinator: Combinator) {
        self.combinator = combinator;
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Well-formed direct leaf rules of this group, in order.
    ///
    /// Nested groups and the combinator are deliberately not part of the
    /// request contract; only top-level leaves go to the server.
    pub fn flatten_well_formed(&self) -> Vec<FilterRule> {
        self.rules
            .iter()
            .filter_map(|node| match node {
                RuleNode::Rule(rule) if rule.is_well_formed() => Some(rule.clone()),
                _ => None,
            })
            .collect()
    }
}
