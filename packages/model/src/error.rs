use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Duplicate page id: {0}")]
    DuplicatePage(String),

    #[error("Duplicate section id {section_id} on page {page_id}")]
    DuplicateSection { page_id: String, section_id: String },

    #[error("Section order on page {0} is not a dense 0..n sequence")]
    SparseOrder(String),

    #[error("Active page not found: {0}")]
    DanglingActivePage(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown page kind: {0}")]
    UnknownPageKind(String),
}
