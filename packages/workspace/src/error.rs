use shelf_editor::{SessionError, StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("No store with subdomain: {0}")]
    StoreNotFound(String),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
