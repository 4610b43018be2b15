// SPDX-License-Identifier: GPL-3.0-only

//! Catalog browsing and selection submission on top of a store
//!
//! Store lookups are substring filters; every lookup here re-checks the
//! returned rows exactly before handing them out.

use chrono::NaiveDate;
use picker_contracts::{ActorStore, SelectionStore, WorkStore};
use picker_types::{
    Actor, SelectedRecord, SelectedRecordPatch, Selection, Tagged, Work, tags,
};

use crate::error::{Result, ServiceError};

pub struct Catalog<S> {
    store: S,
}

impl<S> Catalog<S>
where
    S: ActorStore + WorkStore + SelectionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every tag used by any actor, sorted
    pub async fn tag_overview(&self) -> Result<Vec<String>> {
        let actors = self.store.list_actors().await?;
        let all_tags = tags::unique_across(&actors, Actor::tag_field);
        tracing::debug!(
            actors = actors.len(),
            tags = all_tags.len(),
            "built tag overview"
        );
        Ok(all_tags)
    }

    pub async fn actors_with_tag(&self, tag: &str) -> Result<Vec<Actor>> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ServiceError::InvalidArgument("tag must not be empty".into()));
        }

        let candidates = self.store.actors_with_tag(tag).await?;
        let actors: Vec<Actor> = tags::filter_by_tag(&candidates, Actor::tag_field, tag)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            tag,
            candidates = candidates.len(),
            matched = actors.len(),
            "actors by tag"
        );
        Ok(actors)
    }

    /// Actors whose name contains `query`; a blank query lists everyone
    pub async fn search_actors(&self, query: &str) -> Result<Vec<Actor>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(self.store.list_actors().await?);
        }
        Ok(self.store.search_actors(query).await?)
    }

    pub async fn works_for_actor(&self, actor_name: &str) -> Result<Vec<Work>> {
        if actor_name.trim().is_empty() {
            return Err(ServiceError::InvalidArgument(
                "actor name must not be empty".into(),
            ));
        }

        let mut works = self.store.works_by_actor(actor_name).await?;
        let candidates = works.len();
        works.retain(|work| work.features_actor(actor_name));

        tracing::debug!(
            actor = actor_name,
            candidates,
            matched = works.len(),
            "works by actor"
        );
        Ok(works)
    }

    /// Store a selection as submitted on `on`
    pub async fn submit(&self, selection: &Selection, on: NaiveDate) -> Result<SelectedRecord> {
        if selection.actor_name().trim().is_empty() {
            return Err(ServiceError::MissingActorName);
        }
        if selection.is_empty() {
            return Err(ServiceError::EmptySelection(
                selection.actor_name().to_owned(),
            ));
        }

        let record = self.store.create_selection(selection.to_fields(on)).await?;
        tracing::info!(
            id = %record.id,
            actor = selection.actor_name(),
            works = selection.len(),
            total = %selection.total_display(),
            "selection submitted"
        );
        Ok(record)
    }

    /// Submitted selections, newest first
    pub async fn history(&self) -> Result<Vec<SelectedRecord>> {
        Ok(self.store.list_selections().await?)
    }

    pub async fn update_selection(
        &self,
        id: &str,
        patch: SelectedRecordPatch,
    ) -> Result<SelectedRecord> {
        if patch.is_empty() {
            return Err(ServiceError::InvalidArgument(format!(
                "no columns to update on {id}"
            )));
        }
        Ok(self.store.update_selection(id, patch).await?)
    }

    pub async fn delete_selection(&self, id: &str) -> Result<()> {
        self.store.delete_selection(id).await?;
        tracing::info!(id, "selection deleted");
        Ok(())
    }
}
