//! Error types for the editor

use crate::actions::ActionError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    #[error("No active page")]
    NoActivePage,

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Action rejected: {0}")]
    Action(#[from] ActionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
