// SPDX-License-Identifier: GPL-3.0-only

//! Filter formulas evaluated by the hosted store
//!
//! The store only offers substring tests over its columns, so these filters
//! can over-match (`Lin` is found inside `Lina,Mei` in a joined actor list).
//! Callers re-check the returned rows exactly.

pub const ACTOR_NAME_COLUMN: &str = "CName";
pub const TAGS_COLUMN: &str = "Tags";
pub const ACTORS_COLUMN: &str = "Actors";

/// Actors whose tag column contains `tag` as a JSON string element
pub fn actors_with_tag(tag: &str) -> String {
    // Match the tag as it appears inside the stored JSON, quotes included
    let encoded = serde_json::to_string(tag).unwrap_or_else(|_| format!("\"{tag}\""));
    format!("FIND({}, {{{TAGS_COLUMN}}})", single_quoted(&encoded))
}

/// Works whose actor list mentions `name`
pub fn works_by_actor(name: &str) -> String {
    format!(
        "FIND({}, ARRAYJOIN({{{ACTORS_COLUMN}}}, \",\"))",
        double_quoted(name)
    )
}

/// Actors whose name contains `query`, ignoring case
pub fn search_actors(query: &str) -> String {
    format!(
        "SEARCH(LOWER({}), LOWER({{{ACTOR_NAME_COLUMN}}}))",
        double_quoted(query)
    )
}

fn single_quoted(value: &str) -> String {
    format!("'{}'", escape(value, '\''))
}

fn double_quoted(value: &str) -> String {
    format!("\"{}\"", escape(value, '"'))
}

fn escape(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '\\' || ch == quote {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
