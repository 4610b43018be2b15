// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for Media Picker
//!
//! This crate owns the pieces every other crate agrees on:
//!
//! - **size**: reading size columns (`1024`, `"32GB"`) and showing them ("32 GB")
//! - **tags**: the JSON-array-in-a-text-column tag format and tag queries
//! - **catalog**: actor, work and selection rows as stored in the hosted tables
//! - **selection**: the pick list a user builds before submitting it
//!
//! Nothing here does I/O or async work, and the size and tag functions never
//! fail: unreadable input degrades to zero bytes or an empty tag list.

pub mod catalog;
pub mod date;
pub mod selection;
pub mod size;
pub mod tags;

pub use catalog::{
    Actor, ActorFields, Attachment, Record, RecordPage, SelectedRecord, SelectedRecordFields,
    SelectedRecordPatch, SelectedWorkDetail, Tagged, Thumbnail, Thumbnails, Work, WorkFields,
};
pub use date::{format_display_date, parse_selection_date, selection_date};
pub use selection::Selection;
pub use size::{SizeInput, SizeUnit, SizeValue};
