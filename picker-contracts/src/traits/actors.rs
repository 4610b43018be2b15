// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use picker_types::Actor;

use crate::StoreError;

#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError>;

    /// Actors whose tag column mentions `tag`; may over-match
    async fn actors_with_tag(&self, tag: &str) -> Result<Vec<Actor>, StoreError>;

    /// Actors whose name contains `query`, ignoring case
    async fn search_actors(&self, query: &str) -> Result<Vec<Actor>, StoreError>;
}
