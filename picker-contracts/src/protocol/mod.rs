// SPDX-License-Identifier: GPL-3.0-only

pub mod errors;
pub mod formula;
pub mod tables;

pub use errors::{StoreError, StoreErrorKind};
pub use tables::Tables;
