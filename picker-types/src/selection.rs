// SPDX-License-Identifier: GPL-3.0-only

//! Pick list of works for a single actor, before and after submission

use chrono::NaiveDate;

use crate::catalog::{SelectedRecordFields, SelectedWorkDetail, Work};
use crate::{date, size};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    actor_name: String,
    works: Vec<SelectedWorkDetail>,
}

impl Selection {
    pub fn new(actor_name: impl Into<String>) -> Self {
        Self {
            actor_name: actor_name.into(),
            works: Vec::new(),
        }
    }

    /// Reopen a submitted selection
    pub fn from_fields(fields: &SelectedRecordFields) -> Self {
        Self {
            actor_name: fields.actor_name.clone(),
            works: fields.work_details(),
        }
    }

    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    /// Selected works in the order they were picked
    pub fn works(&self) -> &[SelectedWorkDetail] {
        &self.works
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn contains(&self, work_id: &str) -> bool {
        self.works.iter().any(|work| work.id == work_id)
    }

    /// Add a work; returns false if it was already selected
    pub fn add(&mut self, work: &Work) -> bool {
        if self.contains(&work.id) {
            return false;
        }
        self.works.push(SelectedWorkDetail::from_work(work));
        true
    }

    /// Remove a work; returns false if it was not selected
    pub fn remove(&mut self, work_id: &str) -> bool {
        let before = self.works.len();
        self.works.retain(|work| work.id != work_id);
        self.works.len() != before
    }

    /// Flip the selection state of a work; returns whether it is now selected
    pub fn toggle(&mut self, work: &Work) -> bool {
        if self.remove(&work.id) {
            false
        } else {
            self.add(work)
        }
    }

    pub fn clear(&mut self) {
        self.works.clear();
    }

    pub fn total_bytes(&self) -> f64 {
        self.works.iter().map(|work| work.size).sum()
    }

    pub fn total_display(&self) -> String {
        size::format_bytes(self.total_bytes())
    }

    pub fn total_gb(&self) -> f64 {
        size::to_gb(self.total_bytes())
    }

    /// Columns of the record submitted for this selection
    pub fn to_fields(&self, on: NaiveDate) -> SelectedRecordFields {
        let work_details = serde_json::to_string(&self.works).unwrap_or_else(|e| {
            tracing::warn!("failed to encode work details for {}: {e}", self.actor_name);
            "[]".to_owned()
        });

        SelectedRecordFields {
            actor_name: self.actor_name.clone(),
            work_details: Some(work_details),
            total_size: self.total_bytes().to_string(),
            selection_date: date::selection_date(on),
        }
    }
}
