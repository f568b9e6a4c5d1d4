use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared per-tenant type tag of a Personio attribute.
///
/// The tag decides how `value` is interpreted. Map-shaped entity tags
/// (`Department`, `Team`, `Office`, `Employee`, ...) all collapse into
/// [`AttributeKind::Nested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Whole number value.
    Integer,
    /// Decimal number value.
    Decimal,
    /// Single-line text value.
    Standard,
    /// Multi-line text value.
    Multiline,
    /// URL value, carried as text.
    Link,
    /// Single selection from a predefined list, carried as text.
    List,
    /// Temporal value.
    Date,
    /// Multi-selection from a predefined list, carried as delimited text.
    Tags,
    /// Map-shaped value holding a nested record.
    #[serde(other)]
    Nested,
}

/// One attribute as returned by the Personio API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// Human readable label of the attribute.
    #[serde(default)]
    pub label: Option<String>,
    /// Declared type tag.
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Raw value; `null` when the credential is not entitled to read it.
    #[serde(default)]
    pub value: Value,
    /// Tenant-wide identifier of the attribute, if configured.
    #[serde(default)]
    pub universal_id: Option<String>,
}

impl Attribute {
    /// Create a bare attribute with the given tag and value.
    pub fn new(kind: AttributeKind, value: Value) -> Self {
        Attribute {
            label: None,
            kind,
            value,
            universal_id: None,
        }
    }

    /// True when the credential was not entitled to read this attribute.
    pub fn is_redacted(&self) -> bool {
        self.value.is_null()
    }

    /// Map payload of a nested attribute (`department`, `supervisor`, ...).
    pub fn map_value(&self) -> Option<&serde_json::Map<String, Value>> {
        self.value.as_object()
    }
}
