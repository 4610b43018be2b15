// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use picker_types::Work;

use crate::StoreError;

#[async_trait]
pub trait WorkStore: Send + Sync {
    /// Works whose actor list mentions `actor_name`; may over-match
    async fn works_by_actor(&self, actor_name: &str) -> Result<Vec<Work>, StoreError>;
}
