// SPDX-License-Identifier: GPL-3.0-only

//! In-process store
//!
//! Filters behave like the hosted formulas in [`crate::formula`], substring
//! matches included, so code running against this store sees the same
//! over-matching it would see in production.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use picker_types::{
    Actor, ActorFields, SelectedRecord, SelectedRecordFields, SelectedRecordPatch, Work,
    WorkFields,
};

use crate::{ActorStore, SelectionStore, StoreError, Tables, WorkStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Tables,
    actors: RwLock<Vec<Actor>>,
    works: RwLock<Vec<Work>>,
    selections: RwLock<Vec<SelectedRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(actors: Vec<Actor>, works: Vec<Work>) -> Self {
        Self {
            actors: RwLock::new(actors),
            works: RwLock::new(works),
            ..Self::default()
        }
    }

    /// Use configured table names in errors and logs
    pub fn with_tables(mut self, tables: Tables) -> Self {
        self.tables = tables;
        self
    }

    pub async fn insert_actor(&self, fields: ActorFields) -> Actor {
        let actor = Actor::new(new_record_id(), fields);
        self.actors.write().await.push(actor.clone());
        actor
    }

    pub async fn insert_work(&self, fields: WorkFields) -> Work {
        let work = Work::new(new_record_id(), fields);
        self.works.write().await.push(work.clone());
        work
    }
}

/// Ids shaped like the hosted store's: `rec` followed by 14 characters
fn new_record_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("rec{}", &id[..14])
}

#[async_trait]
impl ActorStore for MemoryStore {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        Ok(self.actors.read().await.clone())
    }

    async fn actors_with_tag(&self, tag: &str) -> Result<Vec<Actor>, StoreError> {
        let needle = serde_json::to_string(tag)?;
        let actors = self.actors.read().await;
        Ok(actors
            .iter()
            .filter(|actor| {
                actor
                    .fields
                    .tags
                    .as_deref()
                    .is_some_and(|raw| raw.contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn search_actors(&self, query: &str) -> Result<Vec<Actor>, StoreError> {
        let query = query.to_lowercase();
        let actors = self.actors.read().await;
        Ok(actors
            .iter()
            .filter(|actor| actor.fields.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WorkStore for MemoryStore {
    async fn works_by_actor(&self, actor_name: &str) -> Result<Vec<Work>, StoreError> {
        let works = self.works.read().await;
        Ok(works
            .iter()
            .filter(|work| work.fields.actors.join(",").contains(actor_name))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SelectionStore for MemoryStore {
    async fn list_selections(&self) -> Result<Vec<SelectedRecord>, StoreError> {
        let mut records = self.selections.read().await.clone();
        records.sort_by(|a, b| b.fields.selection_date.cmp(&a.fields.selection_date));
        Ok(records)
    }

    async fn create_selection(
        &self,
        fields: SelectedRecordFields,
    ) -> Result<SelectedRecord, StoreError> {
        let record = SelectedRecord::new(new_record_id(), fields);
        tracing::debug!(id = %record.id, table = %self.tables.selected, "created record");
        self.selections.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_selection(
        &self,
        id: &str,
        patch: SelectedRecordPatch,
    ) -> Result<SelectedRecord, StoreError> {
        let mut selections = self.selections.write().await;
        let record = selections
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(&self.tables.selected, id))?;

        patch.apply_to(&mut record.fields);
        Ok(record.clone())
    }

    async fn delete_selection(&self, id: &str) -> Result<(), StoreError> {
        let mut selections = self.selections.write().await;
        let before = selections.len();
        selections.retain(|record| record.id != id);

        if selections.len() == before {
            return Err(StoreError::not_found(&self.tables.selected, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreErrorKind;

    fn actor(name: &str, tags: &str) -> ActorFields {
        ActorFields {
            name: name.to_owned(),
            tags: Some(tags.to_owned()),
            avatar: None,
        }
    }

    fn selection(actor_name: &str, date: &str) -> SelectedRecordFields {
        SelectedRecordFields {
            actor_name: actor_name.to_owned(),
            work_details: Some("[]".to_owned()),
            total_size: "0".to_owned(),
            selection_date: date.to_owned(),
        }
    }

    #[test]
    fn record_ids_look_like_store_ids() {
        let id = new_record_id();
        assert!(id.starts_with("rec"));
        assert_eq!(id.len(), 17);
    }

    #[tokio::test]
    async fn tag_lookup_matches_json_elements() {
        let store = MemoryStore::new();
        store.insert_actor(actor("Lin", r#"["drama","comedy"]"#)).await;
        store.insert_actor(actor("Mei", r#"["melodrama"]"#)).await;

        let found = store.actors_with_tag("drama").await.expect("lookup");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields.name, "Lin");
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::new();
        store.insert_actor(actor("Lina", "[]")).await;
        store.insert_actor(actor("Mei", "[]")).await;

        let found = store.search_actors("LIN").await.expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields.name, "Lina");
    }

    #[tokio::test]
    async fn works_lookup_over_matches_like_the_store() {
        let store = MemoryStore::new();
        store
            .insert_work(WorkFields {
                title: "Joint".into(),
                actors: vec!["Lina".into(), "Mei".into()],
                ..Default::default()
            })
            .await;

        let found = store.works_by_actor("Lin").await.expect("lookup");
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn selections_crud() {
        let store = MemoryStore::new();
        let older = store
            .create_selection(selection("Lin", "2024-01-02"))
            .await
            .expect("create");
        let newer = store
            .create_selection(selection("Mei", "2024-03-04"))
            .await
            .expect("create");

        let listed = store.list_selections().await.expect("list");
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);

        let updated = store
            .update_selection(
                &older.id,
                SelectedRecordPatch {
                    total_size: Some("1024".into()),
                    ..Default::default()
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.fields.total_size, "1024");
        assert_eq!(updated.fields.actor_name, "Lin");

        store.delete_selection(&older.id).await.expect("delete");
        assert_eq!(store.list_selections().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = MemoryStore::new();

        let err = store.delete_selection("recMissing").await.unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::NotFound);

        let err = store
            .update_selection("recMissing", SelectedRecordPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::NotFound);
    }

    #[tokio::test]
    async fn errors_name_the_configured_table() {
        let tables = Tables {
            selected: "Picks".to_owned(),
            ..Tables::default()
        };
        let store = MemoryStore::new().with_tables(tables);

        let err = store.delete_selection("recMissing").await.unwrap_err();
        assert_eq!(err.message, "Picks: no record recMissing");

        let err = MemoryStore::new().delete_selection("recMissing").await.unwrap_err();
        assert_eq!(err.message, "Selected: no record recMissing");
    }
}
