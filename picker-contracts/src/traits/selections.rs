// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use picker_types::{SelectedRecord, SelectedRecordFields, SelectedRecordPatch};

use crate::StoreError;

#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Every submitted selection, newest `SelectionDate` first
    async fn list_selections(&self) -> Result<Vec<SelectedRecord>, StoreError>;

    async fn create_selection(
        &self,
        fields: SelectedRecordFields,
    ) -> Result<SelectedRecord, StoreError>;

    async fn update_selection(
        &self,
        id: &str,
        patch: SelectedRecordPatch,
    ) -> Result<SelectedRecord, StoreError>;

    async fn delete_selection(&self, id: &str) -> Result<(), StoreError>;
}
