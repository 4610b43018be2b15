// SPDX-License-Identifier: GPL-3.0-only

//! Exported table rows read from JSON files
//!
//! An export is either a bare array of `{ "id", "fields" }` rows or a list
//! page (`{ "records": [...], "offset": ... }`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use picker_types::{Record, RecordPage, SizeInput};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A row whose columns are read by name
pub type Row = Record<Value>;

#[derive(Deserialize)]
#[serde(untagged)]
enum Export<F> {
    Rows(Vec<Record<F>>),
    Page(RecordPage<F>),
}

impl<F> From<Export<F>> for Vec<Record<F>> {
    fn from(export: Export<F>) -> Self {
        match export {
            Export::Rows(rows) => rows,
            Export::Page(page) => page.records,
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<Row>> {
    load_as(path)
}

pub fn load_as<F: DeserializeOwned>(path: &Path) -> Result<Vec<Record<F>>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_rows(&raw).with_context(|| format!("read rows from {}", path.display()))
}

fn parse_rows<F: DeserializeOwned>(raw: &str) -> Result<Vec<Record<F>>> {
    let export: Export<F> = serde_json::from_str(raw).context(
        "expected an array of { id, fields } records or an object with a \"records\" array",
    )?;
    Ok(export.into())
}

pub fn field<'a>(row: &'a Row, name: &str) -> Option<&'a Value> {
    row.fields.get(name)
}

/// Text column; other JSON types read as missing
pub fn text_field<'a>(row: &'a Row, name: &str) -> Option<&'a str> {
    field(row, name).and_then(Value::as_str)
}

/// Size column, stored as a number or as text
pub fn size_field<'a>(row: &'a Row, name: &str) -> Option<SizeInput<'a>> {
    match field(row, name)? {
        Value::Number(number) => number.as_f64().map(SizeInput::Bytes),
        Value::String(text) => Some(SizeInput::Text(text)),
        _ => None,
    }
}
