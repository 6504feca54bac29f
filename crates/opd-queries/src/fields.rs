//! Field Catalog
//!
//! The server-agreed allow-list of queryable operator record columns.
//! Requests referencing fields outside this catalog may be rejected by
//! the remote endpoint.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Value type of a queryable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Date,
}

/// Description of a single queryable column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Identifier sent on the wire
    pub name: String,
    /// Display label
    pub label: String,
    /// Value type, drives the allowed operator set
    #[serde(default, rename = "inputType")]
    pub input_type: InputType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input_type,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, InputType::Text)
    }
}

/// Known field names for operator records
pub mod names {
    pub const USERID: &str = "userid";
    pub const FULLUSERNAME: &str = "fullusername";
    pub const LOCATION: &str = "location";
    pub const SCAN_COUNT: &str = "scan_count";
    pub const UPI_ID: &str = "upi_id";
    pub const JOININGDT: &str = "joiningdt";
    pub const REMARKS: &str = "remarks";
}

static CATALOG: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::text(names::USERID, "User ID"),
        FieldDescriptor::text(names::FULLUSERNAME, "Full Name"),
        FieldDescriptor::text(names::LOCATION, "Location"),
        FieldDescriptor::new(names::SCAN_COUNT, "Scans", InputType::Number),
        FieldDescriptor::text(names::UPI_ID, "UPI ID"),
        FieldDescriptor::new(names::JOININGDT, "Joining Date", InputType::Date),
        FieldDescriptor::text(names::REMARKS, "Remarks"),
    ]
});

/// The full field catalog, in display order
pub fn field_catalog() -> &'static [FieldDescriptor] {
    &CATALOG
}

/// Look up a field descriptor by name
pub fn find_field(name: &str) -> Option<&'static FieldDescriptor> {
    CATALOG.iter().find(|f| f.name == name)
}

/// Check whether a field name is in the catalog
pub fn is_known_field(name: &str) -> bool {
    find_field(name).is_some()
}

/// All catalog field names, in display order
pub fn field_names() -> Vec<String> {
    CATALOG.iter().map(|f| f.name.clone()).collect()
}
