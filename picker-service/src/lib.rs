// SPDX-License-Identifier: GPL-3.0-only

pub mod catalog;
pub mod error;

pub use catalog::Catalog;
pub use error::{Result, ServiceError};
