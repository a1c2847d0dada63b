//! # Builder Actions
//!
//! Every change to a [`StoreBuilder`] is one of these tagged actions.
//!
//! ## Semantics
//!
//! - Structural actions (`AddSection` .. `UpdatePage`) produce a new document
//!   from a copy of the old one and are recorded in history.
//! - `SetActivePage` changes the view only and is not recorded.
//! - `Undo`, `Redo` and `LoadBuilder` move or reset the history itself.
//! - An action naming a page or section the document does not hold is
//!   rejected with an [`ActionError`] and leaves the document unchanged.

use serde::{Deserialize, Serialize};
use shelf_model::{
    derive_page_id, GlobalStylesPatch, NewPage, Page, PagePatch, Section, SectionPatch,
    StoreBuilder,
};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Append `section` to a page
    AddSection { page_id: String, section: Section },

    RemoveSection { page_id: String, section_id: String },

    /// Patch a section's visibility, settings or styles
    UpdateSection {
        page_id: String,
        section_id: String,
        patch: SectionPatch,
    },

    /// Rearrange a page's sections; `section_ids` lists every section of
    /// the page exactly once, in the new order
    ReorderSections {
        page_id: String,
        section_ids: Vec<String>,
    },

    UpdateGlobalStyles { patch: GlobalStylesPatch },

    /// Create a page; the editor issues its id and makes it active
    AddPage { page: NewPage },

    RemovePage { page_id: String },

    UpdatePage { page_id: String, patch: PagePatch },

    SetActivePage { page_id: String },

    Undo,

    Redo,

    /// Replace the document and forget all history
    LoadBuilder { builder: Box<StoreBuilder> },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Section {section_id} not found on page {page_id}")]
    SectionNotFound { page_id: String, section_id: String },

    #[error("Section {section_id} already exists on page {page_id}")]
    DuplicateSection { page_id: String, section_id: String },

    #[error("Reorder of page {0} must list each of its sections exactly once")]
    InvalidReorder(String),

    #[error("Slug already used by another page: {0}")]
    SlugTaken(String),

    #[error("Document already has a system page")]
    SystemPageExists,

    #[error("Nothing to {0}")]
    HistoryExhausted(&'static str),

    #[error("{0} does not edit the document")]
    NotAnEdit(&'static str),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddSection { .. } => "ADD_SECTION",
            Action::RemoveSection { .. } => "REMOVE_SECTION",
            Action::UpdateSection { .. } => "UPDATE_SECTION",
            Action::ReorderSections { .. } => "REORDER_SECTIONS",
            Action::UpdateGlobalStyles { .. } => "UPDATE_GLOBAL_STYLES",
            Action::AddPage { .. } => "ADD_PAGE",
            Action::RemovePage { .. } => "REMOVE_PAGE",
            Action::UpdatePage { .. } => "UPDATE_PAGE",
            Action::SetActivePage { .. } => "SET_ACTIVE_PAGE",
            Action::Undo => "UNDO",
            Action::Redo => "REDO",
            Action::LoadBuilder { .. } => "LOAD_BUILDER",
        }
    }

    /// Whether applying this action records an undo step
    pub fn is_structural(&self) -> bool {
        match self {
            Action::AddSection { .. }
            | Action::RemoveSection { .. }
            | Action::UpdateSection { .. }
            | Action::ReorderSections { .. }
            | Action::UpdateGlobalStyles { .. }
            | Action::AddPage { .. }
            | Action::RemovePage { .. }
            | Action::UpdatePage { .. } => true,
            Action::SetActivePage { .. }
            | Action::Undo
            | Action::Redo
            | Action::LoadBuilder { .. } => false,
        }
    }

    /// Compute the document this action produces from `doc`.
    ///
    /// `doc` is never modified. History actions (`Undo`, `Redo`,
    /// `LoadBuilder`) return [`ActionError::NotAnEdit`]; the history applies
    /// those itself.
    pub fn edit(&self, doc: &StoreBuilder) -> Result<StoreBuilder, ActionError> {
        match self {
            Action::AddSection { page_id, section } => {
                let page = find_page(doc, page_id)?;
                if page.contains_section(&section.id) {
                    return Err(ActionError::DuplicateSection {
                        page_id: page_id.clone(),
                        section_id: section.id.clone(),
                    });
                }
                let mut sections = page.sections.clone();
                sections.push(section.clone());
                Ok(doc.with_page(page.with_sections(sections)))
            }

            Action::RemoveSection {
                page_id,
                section_id,
            } => {
                let page = find_page(doc, page_id)?;
                find_section(page, page_id, section_id)?;
                let sections = page
                    .sections
                    .iter()
                    .filter(|s| &s.id != section_id)
                    .cloned()
                    .collect();
                Ok(doc.with_page(page.with_sections(sections)))
            }

            Action::UpdateSection {
                page_id,
                section_id,
                patch,
            } => {
                let page = find_page(doc, page_id)?;
                let section = find_section(page, page_id, section_id)?;
                Ok(doc.with_page(page.with_section(section.patched(patch))))
            }

            Action::ReorderSections {
                page_id,
                section_ids,
            } => {
                let page = find_page(doc, page_id)?;
                let unique: HashSet<&str> = section_ids.iter().map(String::as_str).collect();
                if section_ids.len() != page.sections.len() || unique.len() != section_ids.len() {
                    return Err(ActionError::InvalidReorder(page_id.clone()));
                }
                let sections = section_ids
                    .iter()
                    .map(|id| page.section(id).cloned())
                    .collect::<Option<Vec<Section>>>()
                    .ok_or_else(|| ActionError::InvalidReorder(page_id.clone()))?;
                Ok(doc.with_page(page.with_sections(sections)))
            }

            Action::UpdateGlobalStyles { patch } => Ok(doc.with_global_styles(patch)),

            Action::AddPage { page } => {
                if page.is_system_page && doc.has_system_page() {
                    return Err(ActionError::SystemPageExists);
                }
                if doc.page_by_slug(&page.slug).is_some() {
                    return Err(ActionError::SlugTaken(page.slug.clone()));
                }
                let taken: HashSet<&str> = doc.pages.iter().map(|p| p.id.as_str()).collect();
                let id = derive_page_id(&page.name, &taken);
                Ok(doc.with_added_page(page.clone().into_page(id)))
            }

            Action::RemovePage { page_id } => {
                find_page(doc, page_id)?;
                Ok(doc.without_page(page_id))
            }

            Action::UpdatePage { page_id, patch } => {
                let page = find_page(doc, page_id)?;
                if let Some(slug) = &patch.slug {
                    if doc.pages.iter().any(|p| &p.slug == slug && &p.id != page_id) {
                        return Err(ActionError::SlugTaken(slug.clone()));
                    }
                }
                Ok(doc.with_page(page.patched(patch)))
            }

            Action::SetActivePage { page_id } => {
                find_page(doc, page_id)?;
                Ok(doc.with_active_page(page_id))
            }

            Action::Undo | Action::Redo | Action::LoadBuilder { .. } => {
                Err(ActionError::NotAnEdit(self.name()))
            }
        }
    }
}

fn find_page<'d>(doc: &'d StoreBuilder, page_id: &str) -> Result<&'d Page, ActionError> {
    doc.page(page_id)
        .ok_or_else(|| ActionError::PageNotFound(page_id.to_string()))
}

fn find_section<'p>(
    page: &'p Page,
    page_id: &str,
    section_id: &str,
) -> Result<&'p Section, ActionError> {
    page.section(section_id)
        .ok_or_else(|| ActionError::SectionNotFound {
            page_id: page_id.to_string(),
            section_id: section_id.to_string(),
        })
}
