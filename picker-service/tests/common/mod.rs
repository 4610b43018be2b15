// SPDX-License-Identifier: GPL-3.0-only

use picker_contracts::MemoryStore;
use picker_service::Catalog;
use picker_types::{Actor, Work};
use serde_json::json;

pub fn actor(id: &str, name: &str, tags: Option<&str>) -> Actor {
    let mut fields = json!({ "CName": name });
    if let Some(tags) = tags {
        fields["Tags"] = json!(tags);
    }
    serde_json::from_value(json!({ "id": id, "fields": fields })).expect("actor fixture")
}

pub fn work(id: &str, title: &str, actors: &[&str], size: serde_json::Value) -> Work {
    serde_json::from_value(json!({
        "id": id,
        "fields": { "Title": title, "Actors": actors, "Size": size }
    }))
    .expect("work fixture")
}

/// Small catalog with a few deliberate traps for substring filters
pub fn catalog() -> Catalog<MemoryStore> {
    let actors = vec![
        actor("recA1", "Lin", Some(r#"["drama","comedy"]"#)),
        actor("recA2", "Lina", Some(r#"["action"]"#)),
        actor("recA3", "Mei", Some(r#"{"note":"drama"}"#)),
        actor("recA4", "Hao", None),
        actor("recA5", "Xue", Some(r#"["comedy","action","drama"]"#)),
    ];
    let works = vec![
        work("recW1", "Solo", &["Lin"], json!("32GB")),
        work("recW2", "Duet", &["Lina", "Mei"], json!(1_073_741_824u64)),
        work("recW3", "Ensemble", &["Mei", "Lin"], json!("1.5 GB")),
        work("recW4", "Unsized", &["Lin"], json!(null)),
    ];
    Catalog::new(MemoryStore::with_catalog(actors, works))
}
