// SPDX-License-Identifier: GPL-3.0-only

//! Selection dates

use chrono::{DateTime, NaiveDate};

/// Storage format of `SelectionDate`
pub const SELECTION_DATE_FORMAT: &str = "%Y-%m-%d";

const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d";

/// Render a date the way the selection table stores it
pub fn selection_date(date: NaiveDate) -> String {
    date.format(SELECTION_DATE_FORMAT).to_string()
}

pub fn parse_selection_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, SELECTION_DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Show a stored date as `YYYY/MM/DD`; unreadable input is returned as-is
pub fn format_display_date(raw: &str) -> String {
    match parse_selection_date(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_owned(),
    }
}
