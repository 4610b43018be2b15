// SPDX-License-Identifier: GPL-3.0-only

pub mod memory;
pub mod protocol;
pub mod traits;

pub use memory::MemoryStore;
pub use protocol::{StoreError, StoreErrorKind, Tables, formula};
pub use traits::{ActorStore, SelectionStore, WorkStore};
