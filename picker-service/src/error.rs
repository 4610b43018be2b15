// SPDX-License-Identifier: GPL-3.0-only

use picker_contracts::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Selection for {0} has no works")]
    EmptySelection(String),

    #[error("Selection has no actor name")]
    MissingActorName,
}

pub type Result<T> = std::result::Result<T, ServiceError>;
