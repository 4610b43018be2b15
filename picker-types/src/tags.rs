// SPDX-License-Identifier: GPL-3.0-only

//! Tag lists stored as JSON text
//!
//! Tag fields hold a JSON array of strings inside a single long-text column,
//! e.g. `["drama","comedy"]`. Decoding is permissive: a missing, blank or
//! malformed field reads as no tags at all.

use std::collections::BTreeSet;

use serde_json::Value;

/// Separator used by [`parse_comma_separated`]
pub const DEFAULT_DELIMITER: &str = ",";

/// Separator used by [`join_for_display`]
pub const DISPLAY_SEPARATOR: &str = ", ";

/// Decode a stored tag field into its tags.
///
/// Non-string and blank elements are skipped. Never fails.
pub fn decode(wire: Option<&str>) -> Vec<String> {
    let Some(wire) = wire else {
        return Vec::new();
    };
    if wire.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(wire) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) if !tag.trim().is_empty() => Some(tag),
                _ => None,
            })
            .collect(),
        Ok(other) => {
            tracing::warn!(kind = json_kind(&other), "tag field is not a JSON array");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("failed to parse tag field {wire:?}: {e}");
            Vec::new()
        }
    }
}

/// Encode tags for storage, trimming each and dropping blank ones.
///
/// Order is preserved.
pub fn encode<S: AsRef<str>>(tags: &[S]) -> String {
    let clean: Vec<&str> = tags
        .iter()
        .map(|tag| tag.as_ref().trim())
        .filter(|tag| !tag.is_empty())
        .collect();

    serde_json::to_string(&clean).unwrap_or_else(|_| "[]".to_owned())
}

/// Split free text on `delimiter` into trimmed, non-empty tags
pub fn parse_delimited(text: &str, delimiter: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.split(delimiter)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split comma-separated text (e.g. `"drama, comedy"`) into tags
pub fn parse_comma_separated(text: &str) -> Vec<String> {
    parse_delimited(text, DEFAULT_DELIMITER)
}

/// Join tags for display, e.g. `"drama, comedy"`
pub fn join_for_display<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref())
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

/// Check whether a stored tag field holds `target` exactly
pub fn contains(wire: Option<&str>, target: &str) -> bool {
    decode(wire).iter().any(|tag| tag == target)
}

/// Collect every distinct tag across `records`, sorted ascending
pub fn unique_across<R, F>(records: &[R], field: F) -> Vec<String>
where
    F: Fn(&R) -> Option<&str>,
{
    records
        .iter()
        .flat_map(|record| decode(field(record)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep the records whose tag field holds `target`, in their original order
pub fn filter_by_tag<'r, R, F>(records: &'r [R], field: F, target: &str) -> Vec<&'r R>
where
    F: Fn(&R) -> Option<&str>,
{
    records
        .iter()
        .filter(|&record| contains(field(record), target))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
