// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Names of the hosted tables backing the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub actors: String,
    pub works: String,
    pub selected: String,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            actors: "Actors".to_owned(),
            works: "Works".to_owned(),
            selected: "Selected".to_owned(),
        }
    }
}
