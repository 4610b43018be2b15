// SPDX-License-Identifier: GPL-3.0-only

//! Conversions between stored size fields and human-readable sizes
//!
//! Size fields arrive either as a byte count or as a unit-suffixed string
//! such as `"32GB"` or `"1.5 tb"`. Every function here is total: input that
//! cannot be understood counts as zero bytes.

use std::fmt;

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Bytes in one gigabyte (1024³)
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Binary size units, each 1024 times the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 5] = [
        SizeUnit::Bytes,
        SizeUnit::Kilobytes,
        SizeUnit::Megabytes,
        SizeUnit::Gigabytes,
        SizeUnit::Terabytes,
    ];

    /// Number of bytes in one of this unit
    pub fn multiplier(self) -> f64 {
        match self {
            SizeUnit::Bytes => 1.0,
            SizeUnit::Kilobytes => 1024.0,
            SizeUnit::Megabytes => 1024.0 * 1024.0,
            SizeUnit::Gigabytes => 1024.0 * 1024.0 * 1024.0,
            SizeUnit::Terabytes => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        }
    }

    /// Get the display label for this unit
    pub fn label(self) -> &'static str {
        match self {
            SizeUnit::Bytes => "B",
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
            SizeUnit::Terabytes => "TB",
        }
    }

    /// Look up a unit by its label, ignoring ASCII case
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(label))
    }

    fn larger(self) -> Option<Self> {
        match self {
            SizeUnit::Bytes => Some(SizeUnit::Kilobytes),
            SizeUnit::Kilobytes => Some(SizeUnit::Megabytes),
            SizeUnit::Megabytes => Some(SizeUnit::Gigabytes),
            SizeUnit::Gigabytes => Some(SizeUnit::Terabytes),
            SizeUnit::Terabytes => None,
        }
    }

    /// Pick the largest unit that `bytes` fills at least once.
    ///
    /// Thresholds are compared directly against the unit multipliers, so a
    /// value sitting exactly on a power of 1024 always selects that unit.
    /// Anything below one kilobyte (including fractions and negatives) stays
    /// in bytes, and anything past a terabyte stays in terabytes.
    pub fn auto_select(bytes: f64) -> Self {
        let mut unit = SizeUnit::Bytes;
        while let Some(next) = unit.larger() {
            if bytes < next.multiplier() {
                break;
            }
            unit = next;
        }
        unit
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A size field as stored in a record: a byte count or a unit string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Bytes(f64),
    Text(String),
}

impl SizeValue {
    pub fn as_input(&self) -> SizeInput<'_> {
        match self {
            SizeValue::Bytes(bytes) => SizeInput::Bytes(*bytes),
            SizeValue::Text(text) => SizeInput::Text(text),
        }
    }
}

/// Borrowed view of a size value accepted by the conversion functions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeInput<'a> {
    Bytes(f64),
    Text(&'a str),
}

impl From<f64> for SizeInput<'_> {
    fn from(bytes: f64) -> Self {
        SizeInput::Bytes(bytes)
    }
}

impl From<u64> for SizeInput<'_> {
    fn from(bytes: u64) -> Self {
        SizeInput::Bytes(bytes as f64)
    }
}

impl From<i64> for SizeInput<'_> {
    fn from(bytes: i64) -> Self {
        SizeInput::Bytes(bytes as f64)
    }
}

impl<'a> From<&'a str> for SizeInput<'a> {
    fn from(text: &'a str) -> Self {
        SizeInput::Text(text)
    }
}

impl<'a> From<&'a String> for SizeInput<'a> {
    fn from(text: &'a String) -> Self {
        SizeInput::Text(text)
    }
}

impl<'a> From<&'a SizeValue> for SizeInput<'a> {
    fn from(value: &'a SizeValue) -> Self {
        value.as_input()
    }
}

/// Parse a size value to a byte count.
///
/// Numbers pass through untouched. Strings are either a plain decimal
/// (`"1024"`, `"1024.5"`) or a decimal followed by an optional run of
/// whitespace and a unit (`"32GB"`, `"1.5 tb"`). Anything else is 0.
pub fn parse_to_bytes<'a>(input: impl Into<SizeInput<'a>>) -> f64 {
    match input.into() {
        SizeInput::Bytes(bytes) => bytes,
        SizeInput::Text(text) => parse_text(text).unwrap_or(0.0),
    }
}

fn parse_text(text: &str) -> Option<f64> {
    let (number, rest) = split_number(text)?;
    let value: f64 = number.parse().ok()?;

    let bytes = if rest.is_empty() {
        value
    } else {
        value * SizeUnit::from_label(rest.trim_start())?.multiplier()
    };

    // Digit runs too long for f64 overflow to infinity
    bytes.is_finite().then_some(bytes)
}

/// Split a leading `digits[.digits]` run off `text`.
fn split_number(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return None;
    }

    let mut end = int_len;
    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        // A dot with no digits after it is not part of the number
        if frac_len > 0 {
            end = int_len + 1 + frac_len;
        }
    }

    Some(text.split_at(end))
}

/// Format a size value for display (e.g., "1.5 GB")
pub fn format<'a>(input: impl Into<SizeInput<'a>>) -> String {
    format_bytes(parse_to_bytes(input))
}

/// Format a byte count for display, with at most two decimals
pub fn format_bytes(bytes: f64) -> String {
    if bytes == 0.0 || !bytes.is_finite() {
        return "0 B".to_owned();
    }

    let mut unit = SizeUnit::auto_select(bytes);
    let mut value = round_2(bytes / unit.multiplier());

    // 1023.999 KB rounds to 1024 KB; show it as 1 MB instead
    if value >= 1024.0
        && let Some(next) = unit.larger()
    {
        unit = next;
        value = round_2(bytes / unit.multiplier());
    }

    format!("{value} {unit}")
}

/// Format a size value followed by its exact byte count
/// (e.g., "1.5 GB (1,610,612,736 bytes)")
pub fn format_with_bytes<'a>(input: impl Into<SizeInput<'a>>) -> String {
    let bytes = parse_to_bytes(input);
    let exact = if !bytes.is_finite() {
        "0".to_owned()
    } else if bytes.abs() < i128::MAX as f64 {
        (bytes.round() as i128).to_formatted_string(&Locale::en)
    } else {
        // Past i128 the cast saturates; print the plain count
        format!("{}", bytes.round())
    };
    format!("{} ({} bytes)", format_bytes(bytes), exact)
}

/// Convert a size value to gigabytes, without rounding
pub fn to_gb<'a>(input: impl Into<SizeInput<'a>>) -> f64 {
    parse_to_bytes(input) / BYTES_PER_GB
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
