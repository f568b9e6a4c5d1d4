use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

use crate::personio::attribute::{Attribute, AttributeKind};
use crate::personio::employee::Supervisor;

/// Convert a standard, multiline, link or list API value to a string.
/// Null values and type mismatches yield `None`.
pub fn attr_to_string(attr: &Attribute) -> Option<String> {
    if attr.value.is_null() {
        return None;
    }
    attr.value.as_str().map(str::to_string)
}

/// Convert a numeric API value to an integer. The wire representation is a
/// JSON number, integer- or float-encoded depending on the attribute.
pub fn attr_to_int(attr: &Attribute) -> Option<i64> {
    if attr.value.is_null() {
        return None;
    }
    match &attr.value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float_val| float_val as i64)),
        _ => None,
    }
}

/// Convert a decimal API value to a float.
pub fn attr_to_float(attr: &Attribute) -> Option<f64> {
    if attr.value.is_null() {
        return None;
    }
    attr.value.as_f64()
}

/// Convert a temporal API value to an RFC 3339 string in the UTC timezone.
/// Values that do not hold an extractable instant yield `None`.
pub fn attr_to_date_string(attr: &Attribute) -> Option<String> {
    if attr.value.is_null() {
        return None;
    }
    let raw = attr.value.as_str()?;
    let instant = parse_instant(raw)?;
    Some(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
}

// Personio sends either a full RFC 3339 timestamp with offset or a bare
// calendar date, which is taken as midnight UTC.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Inspect the declared type tag and convert the value with the matching
/// mechanism:
///   - integer, decimal: rendered as decimal text
///   - standard, multiline, link, list: direct interpretation as string
///   - date: RFC 3339 in UTC
///
/// Tag and nested values have no scalar rendering and yield `None`.
pub fn attr_to_any_string(attr: &Attribute) -> Option<String> {
    if attr.value.is_null() {
        return None;
    }
    match attr.kind {
        AttributeKind::Integer => attr_to_int(attr).map(|int_val| int_val.to_string()),
        AttributeKind::Decimal => attr_to_float(attr).map(|float_val| float_val.to_string()),
        AttributeKind::Standard
        | AttributeKind::Multiline
        | AttributeKind::Link
        | AttributeKind::List => attr_to_string(attr),
        AttributeKind::Date => attr_to_date_string(attr),
        AttributeKind::Tags | AttributeKind::Nested => None,
    }
}

/// Split a tag API value on `,` into an ordered list, verbatim. Null values
/// and type mismatches yield an empty list rather than `None`.
pub fn attr_to_tags(attr: &Attribute) -> Vec<String> {
    if attr.value.is_null() {
        return Vec::new();
    }
    match attr.value.as_str() {
        Some(raw) => raw.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Extract one named item of a map-shaped API value (e.g. department) as a
/// string.
pub fn map_item_to_string(attr: &Attribute, item_key: &str) -> Option<String> {
    if attr.value.is_null() {
        return None;
    }
    let map_val = attr.map_value()?;
    map_val.get(item_key)?.as_str().map(str::to_string)
}

/// Extract one named item of a map-shaped API value (e.g. department) as an
/// integer.
pub fn map_item_to_int(attr: &Attribute, item_key: &str) -> Option<i64> {
    if attr.value.is_null() {
        return None;
    }
    let map_val = attr.map_value()?;
    map_val.get(item_key)?.as_f64().map(|float_val| float_val as i64)
}

/// Extract one named item of a doubly-nested map API value (e.g. supervisor)
/// as a string. The item is itself `{value, ...}`-wrapped.
pub fn nested_map_item_to_string(attr: &Attribute, item_key: &str) -> Option<String> {
    if attr.value.is_null() {
        return None;
    }
    let wrapped = attr.map_value()?.get(item_key)?.as_object()?;
    wrapped.get("value")?.as_str().map(str::to_string)
}

/// Extract one named item of a doubly-nested map API value (e.g. supervisor)
/// as an integer.
pub fn nested_map_item_to_int(attr: &Attribute, item_key: &str) -> Option<i64> {
    if attr.value.is_null() {
        return None;
    }
    let wrapped = attr.map_value()?.get(item_key)?.as_object()?;
    wrapped.get("value")?.as_f64().map(|float_val| float_val as i64)
}

/// Build the nested supervisor identity record. Present only if at least
/// one of its members is readable.
pub fn extract_supervisor(attr: &Attribute) -> Option<Supervisor> {
    let supervisor = Supervisor {
        id: nested_map_item_to_int(attr, "id"),
        email: nested_map_item_to_string(attr, "email"),
        first_name: nested_map_item_to_string(attr, "first_name"),
        last_name: nested_map_item_to_string(attr, "last_name"),
    };

    if supervisor.is_empty() {
        return None;
    }
    Some(supervisor)
}
