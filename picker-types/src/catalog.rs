// SPDX-License-Identifier: GPL-3.0-only

//! Catalog rows as stored in the hosted tables
//!
//! Column names are kept exactly as they appear in the tables (`CName`,
//! `Tags`, `Size`, ...) through serde renames; Rust field names follow
//! their meaning.

use serde::{Deserialize, Serialize};

use crate::size::{self, SizeValue};
use crate::tags;

/// One row of a table: the store-assigned id and the row's columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: String,
    pub fields: F,
}

impl<F> Record<F> {
    pub fn new(id: impl Into<String>, fields: F) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// A page of rows as returned by a list call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPage<F> {
    pub records: Vec<Record<F>>,

    /// Cursor for the next page, absent on the last one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

/// Rows that carry a JSON-encoded tag column
pub trait Tagged {
    /// Raw content of the tag column
    fn tag_field(&self) -> Option<&str>;

    fn tags(&self) -> Vec<String> {
        tags::decode(self.tag_field())
    }

    fn has_tag(&self, tag: &str) -> bool {
        tags::contains(self.tag_field(), tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorFields {
    /// Display name, also used to link works to the actor
    #[serde(rename = "CName", default)]
    pub name: String,

    /// JSON array text, e.g. `["drama","comedy"]`
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(rename = "Avatar", default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

pub type Actor = Record<ActorFields>;

impl Tagged for Actor {
    fn tag_field(&self) -> Option<&str> {
        self.fields.tags.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<Thumbnail>,
}

/// An uploaded file in an attachment column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    /// MIME type
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
}

impl Attachment {
    /// Best preview url: large thumbnail, then small, then the file itself
    pub fn preview_url(&self) -> &str {
        self.thumbnails
            .as_ref()
            .and_then(|thumbs| thumbs.large.as_ref().or(thumbs.small.as_ref()))
            .map_or(self.url.as_str(), |thumb| thumb.url.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkFields {
    #[serde(rename = "Title", default)]
    pub title: String,

    /// Names of the actors featured in this work
    #[serde(rename = "Actors", default)]
    pub actors: Vec<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(rename = "Gallery", default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<Attachment>,

    /// Byte count or unit string such as "32GB"
    #[serde(rename = "Size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeValue>,
}

pub type Work = Record<WorkFields>;

impl Tagged for Work {
    fn tag_field(&self) -> Option<&str> {
        self.fields.tags.as_deref()
    }
}

impl Record<WorkFields> {
    /// Size in bytes; a missing or unreadable size counts as 0
    pub fn size_bytes(&self) -> f64 {
        self.fields
            .size
            .as_ref()
            .map_or(0.0, |value| size::parse_to_bytes(value))
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.fields.gallery.first().map(Attachment::preview_url)
    }

    pub fn features_actor(&self, name: &str) -> bool {
        self.fields.actors.iter().any(|actor| actor == name)
    }
}

/// Snapshot of a work kept inside a submitted selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedWorkDetail {
    pub id: String,
    pub title: String,
    /// Bytes
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl SelectedWorkDetail {
    pub fn from_work(work: &Work) -> Self {
        Self {
            id: work.id.clone(),
            title: work.fields.title.clone(),
            size: work.size_bytes(),
            thumbnail: work.thumbnail().map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRecordFields {
    #[serde(rename = "ActorName", default)]
    pub actor_name: String,

    /// JSON array of [`SelectedWorkDetail`]
    #[serde(rename = "WorkDetails", default, skip_serializing_if = "Option::is_none")]
    pub work_details: Option<String>,

    /// Total size in bytes, as text
    #[serde(rename = "TotalSize", default)]
    pub total_size: String,

    /// `YYYY-MM-DD`
    #[serde(rename = "SelectionDate", default)]
    pub selection_date: String,
}

pub type SelectedRecord = Record<SelectedRecordFields>;

impl SelectedRecordFields {
    /// Decode the stored work details; unreadable details read as none
    pub fn work_details(&self) -> Vec<SelectedWorkDetail> {
        let Some(raw) = self.work_details.as_deref() else {
            return Vec::new();
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }

        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("failed to parse work details for {}: {e}", self.actor_name);
            Vec::new()
        })
    }

    pub fn total_bytes(&self) -> f64 {
        size::parse_to_bytes(&self.total_size)
    }
}

/// Partial update of a selection record; `None` leaves a column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRecordPatch {
    #[serde(rename = "ActorName", default, skip_serializing_if = "Option::is_none")]
    pub actor_name: Option<String>,
    #[serde(rename = "WorkDetails", default, skip_serializing_if = "Option::is_none")]
    pub work_details: Option<String>,
    #[serde(rename = "TotalSize", default, skip_serializing_if = "Option::is_none")]
    pub total_size: Option<String>,
    #[serde(rename = "SelectionDate", default, skip_serializing_if = "Option::is_none")]
    pub selection_date: Option<String>,
}

impl SelectedRecordPatch {
    pub fn is_empty(&self) -> bool {
        self.actor_name.is_none()
            && self.work_details.is_none()
            && self.total_size.is_none()
            && self.selection_date.is_none()
    }

    pub fn apply_to(&self, fields: &mut SelectedRecordFields) {
        if let Some(actor_name) = &self.actor_name {
            fields.actor_name = actor_name.clone();
        }
        if let Some(work_details) = &self.work_details {
            fields.work_details = Some(work_details.clone());
        }
        if let Some(total_size) = &self.total_size {
            fields.total_size = total_size.clone();
        }
        if let Some(selection_date) = &self.selection_date {
            fields.selection_date = selection_date.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn work_json() -> serde_json::Value {
        json!({
            "id": "recWork1",
            "fields": {
                "Title": "Night Shift",
                "Actors": ["Lin", "Mei"],
                "Tags": "[\"drama\",\"night\"]",
                "Size": "1.5GB",
                "Gallery": [{
                    "id": "att1",
                    "url": "https://cdn.example/full.jpg",
                    "filename": "full.jpg",
                    "size": 2048,
                    "type": "image/jpeg",
                    "thumbnails": {
                        "small": { "url": "https://cdn.example/s.jpg", "width": 36, "height": 36 },
                        "large": { "url": "https://cdn.example/l.jpg", "width": 512, "height": 512 }
                    }
                }]
            }
        })
    }

    #[test]
    fn actor_decodes_store_columns() {
        let actor: Actor = serde_json::from_value(json!({
            "id": "recActor1",
            "fields": { "CName": "Lin", "Tags": "[\"drama\"]" }
        }))
        .expect("actor");

        assert_eq!(actor.fields.name, "Lin");
        assert_eq!(actor.tags(), vec!["drama"]);
        assert!(actor.has_tag("drama"));
        assert!(actor.fields.avatar.is_none());
    }

    #[test]
    fn actor_without_tags_has_none() {
        let actor: Actor =
            serde_json::from_value(json!({ "id": "rec2", "fields": { "CName": "Mei" } }))
                .expect("actor");
        assert!(actor.tags().is_empty());
    }

    #[test]
    fn work_helpers() {
        let work: Work = serde_json::from_value(work_json()).expect("work");

        assert_eq!(work.size_bytes(), 1_610_612_736.0);
        assert_eq!(work.thumbnail(), Some("https://cdn.example/l.jpg"));
        assert!(work.features_actor("Mei"));
        assert!(!work.features_actor("Me"));
        assert_eq!(work.tags(), vec!["drama", "night"]);
    }

    #[test]
    fn work_with_numeric_size_and_no_gallery() {
        let work: Work = serde_json::from_value(json!({
            "id": "rec3",
            "fields": { "Title": "Short", "Size": 1024 }
        }))
        .expect("work");

        assert_eq!(work.size_bytes(), 1024.0);
        assert_eq!(work.thumbnail(), None);
        assert!(work.fields.actors.is_empty());
    }

    #[test]
    fn attachment_preview_falls_back_to_file() {
        let attachment = Attachment {
            id: "att".into(),
            url: "https://cdn.example/raw.png".into(),
            ..Default::default()
        };
        assert_eq!(attachment.preview_url(), "https://cdn.example/raw.png");
    }

    #[test]
    fn selected_work_detail_snapshot() {
        let work: Work = serde_json::from_value(work_json()).expect("work");
        let detail = SelectedWorkDetail::from_work(&work);

        assert_eq!(detail.id, "recWork1");
        assert_eq!(detail.title, "Night Shift");
        assert_eq!(detail.size, 1_610_612_736.0);
        assert_eq!(detail.thumbnail.as_deref(), Some("https://cdn.example/l.jpg"));
    }

    #[test]
    fn selected_record_uses_store_column_names() {
        let fields = SelectedRecordFields {
            actor_name: "Lin".into(),
            work_details: None,
            total_size: "1024".into(),
            selection_date: "2024-05-01".into(),
        };
        let value = serde_json::to_value(&fields).expect("serialize");

        assert_eq!(
            value,
            json!({ "ActorName": "Lin", "TotalSize": "1024", "SelectionDate": "2024-05-01" })
        );
        assert_eq!(fields.total_bytes(), 1024.0);
        assert!(fields.work_details().is_empty());
    }

    #[test]
    fn malformed_work_details_read_as_empty() {
        let fields = SelectedRecordFields {
            work_details: Some("{broken".into()),
            ..Default::default()
        };
        assert!(fields.work_details().is_empty());
    }

    #[test]
    fn patch_only_touches_given_columns() {
        let mut fields = SelectedRecordFields {
            actor_name: "Lin".into(),
            work_details: Some("[]".into()),
            total_size: "0".into(),
            selection_date: "2024-05-01".into(),
        };
        let patch = SelectedRecordPatch {
            total_size: Some("2048".into()),
            ..Default::default()
        };

        assert!(!patch.is_empty());
        patch.apply_to(&mut fields);
        assert_eq!(fields.total_size, "2048");
        assert_eq!(fields.actor_name, "Lin");
        assert_eq!(
            serde_json::to_value(&patch).expect("serialize"),
            json!({ "TotalSize": "2048" })
        );
    }
}
