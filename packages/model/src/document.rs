//! # Store Builder Document
//!
//! The persisted page-builder document: a [`StoreBuilder`] owns ordered
//! [`Page`]s, each owning ordered [`Section`]s.
//!
//! ## Invariants
//!
//! - `active_page_id` names an existing page whenever `pages` is non-empty
//! - section ids are unique within a page, page ids within a document
//! - within a page, `section.order` equals the section's index (dense `0..n`)
//! - hidden sections stay in the document; only rendering skips them
//!
//! Every edit goes through a `*_patched` / `with_*` helper that returns a new
//! value and leaves the receiver untouched, so snapshots held elsewhere stay
//! valid records of the document at that point in time.

use crate::section_type::SectionType;
use crate::styles::{GlobalStyles, GlobalStylesPatch, StyleProps};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-form section settings (`heading`, `columns`, `showPrice`, ...)
pub type Settings = serde_json::Map<String, serde_json::Value>;

pub const DOCUMENT_VERSION: &str = "1.0";
pub const HOME_PAGE_ID: &str = "home";

/// One configurable content block on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    pub order: usize,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub styles: StyleProps,
}

fn default_visible() -> bool {
    true
}

impl Section {
    pub fn new(id: impl Into<String>, section_type: SectionType) -> Self {
        Self {
            id: id.into(),
            section_type,
            order: 0,
            visible: true,
            settings: Settings::new(),
            styles: StyleProps::default(),
        }
    }

    /// Copy with the patch applied. `id`, `type` and `order` never change
    /// through a patch.
    pub fn patched(&self, patch: &SectionPatch) -> Section {
        Section {
            id: self.id.clone(),
            section_type: self.section_type.clone(),
            order: self.order,
            visible: patch.visible.unwrap_or(self.visible),
            settings: patch.settings.clone().unwrap_or_else(|| self.settings.clone()),
            styles: patch.styles.clone().unwrap_or_else(|| self.styles.clone()),
        }
    }

    pub fn setting(&self, key: &str) -> Option<&serde_json::Value> {
        self.settings.get(key)
    }

    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(|value| value.as_str())
    }

    pub fn setting_bool(&self, key: &str) -> Option<bool> {
        self.settings.get(key).and_then(|value| value.as_bool())
    }

    /// Numeric setting; accepts numbers and numeric strings
    pub fn setting_i64(&self, key: &str) -> Option<i64> {
        match self.settings.get(key)? {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64)),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn setting_f64(&self, key: &str) -> Option<f64> {
        match self.settings.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn setting_array(&self, key: &str) -> &[serde_json::Value] {
        self.settings
            .get(key)
            .and_then(|value| value.as_array())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Partial update to a section's mutable fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleProps>,
}

impl SectionPatch {
    pub fn visibility(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Default::default()
        }
    }

    pub fn settings(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
            ..Default::default()
        }
    }

    pub fn styles(styles: StyleProps) -> Self {
        Self {
            styles: Some(styles),
            ..Default::default()
        }
    }
}

/// An ordered collection of sections reachable at `slug`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub is_system_page: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    pub fn home() -> Self {
        Self {
            id: HOME_PAGE_ID.to_string(),
            name: "Home".to_string(),
            slug: "/".to_string(),
            is_system_page: true,
            sections: Vec::new(),
        }
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn contains_section(&self, section_id: &str) -> bool {
        self.section(section_id).is_some()
    }

    /// Copy holding `sections`, renumbered to match their positions
    pub fn with_sections(&self, mut sections: Vec<Section>) -> Page {
        renumber(&mut sections);
        Page {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
            is_system_page: self.is_system_page,
            sections,
        }
    }

    /// Copy with one section replaced by `section` (matched by id)
    pub fn with_section(&self, section: Section) -> Page {
        let sections = self
            .sections
            .iter()
            .map(|existing| {
                if existing.id == section.id {
                    Section {
                        order: existing.order,
                        ..section.clone()
                    }
                } else {
                    existing.clone()
                }
            })
            .collect();

        Page {
            sections,
            ..self.clone()
        }
    }

    pub fn patched(&self, patch: &PagePatch) -> Page {
        Page {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            slug: patch.slug.clone().unwrap_or_else(|| self.slug.clone()),
            is_system_page: self.is_system_page,
            sections: self.sections.clone(),
        }
    }

    /// True when orders form the dense sequence `0..n` matching positions
    pub fn has_dense_order(&self) -> bool {
        self.sections
            .iter()
            .enumerate()
            .all(|(index, section)| section.order == index)
    }

    /// Visible sections sorted by `order`, the sequence a storefront shows
    pub fn visible_sections(&self) -> Vec<&Section> {
        let mut visible: Vec<&Section> = self.sections.iter().filter(|s| s.visible).collect();
        visible.sort_by_key(|s| s.order);
        visible
    }
}

/// Rewrite every `order` to the section's index
pub fn renumber(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index;
    }
}

/// Fields a caller supplies to create a page; the id is issued by the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub is_system_page: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl NewPage {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            is_system_page: false,
            sections: Vec::new(),
        }
    }

    pub fn into_page(self, id: String) -> Page {
        let mut sections = self.sections;
        renumber(&mut sections);
        Page {
            id,
            name: self.name,
            slug: self.slug,
            is_system_page: self.is_system_page,
            sections,
        }
    }
}

/// Partial update to a page's name and routing slug
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Root page-builder document for one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreBuilder {
    pub version: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_page_id: Option<String>,
    #[serde(default)]
    pub global_styles: GlobalStyles,
    #[serde(default, rename = "customCSS", skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::default_document()
    }
}

impl StoreBuilder {
    /// Fresh document for a newly provisioned store: one empty system home page
    pub fn default_document() -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            pages: vec![Page::home()],
            active_page_id: Some(HOME_PAGE_ID.to_string()),
            global_styles: GlobalStyles::default(),
            custom_css: None,
            draft: true,
            last_saved: None,
        }
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.active_page_id.as_deref().and_then(|id| self.page(id))
    }

    pub fn has_system_page(&self) -> bool {
        self.pages.iter().any(|p| p.is_system_page)
    }

    /// Copy with the page of the same id replaced
    pub fn with_page(&self, page: Page) -> StoreBuilder {
        let pages = self
            .pages
            .iter()
            .map(|existing| {
                if existing.id == page.id {
                    page.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();

        StoreBuilder {
            pages,
            ..self.clone()
        }
    }

    /// Copy with `page` appended and made active
    pub fn with_added_page(&self, page: Page) -> StoreBuilder {
        let mut pages = self.pages.clone();
        let active_page_id = Some(page.id.clone());
        pages.push(page);

        StoreBuilder {
            pages,
            active_page_id,
            ..self.clone()
        }
    }

    /// Copy without the page; the active page falls back to the first
    /// remaining page, or to none when the document is left empty
    pub fn without_page(&self, page_id: &str) -> StoreBuilder {
        let pages: Vec<Page> = self
            .pages
            .iter()
            .filter(|p| p.id != page_id)
            .cloned()
            .collect();

        let active_page_id = if self.active_page_id.as_deref() == Some(page_id) {
            pages.first().map(|p| p.id.clone())
        } else {
            self.active_page_id.clone()
        };

        StoreBuilder {
            pages,
            active_page_id,
            ..self.clone()
        }
    }

    pub fn with_global_styles(&self, patch: &GlobalStylesPatch) -> StoreBuilder {
        StoreBuilder {
            global_styles: self.global_styles.patched(patch),
            ..self.clone()
        }
    }

    pub fn with_active_page(&self, page_id: &str) -> StoreBuilder {
        StoreBuilder {
            active_page_id: Some(page_id.to_string()),
            ..self.clone()
        }
    }

    /// Copy stamped for persistence with the given draft flag and save time
    pub fn stamped(&self, draft: bool, saved_at: DateTime<Utc>) -> StoreBuilder {
        StoreBuilder {
            draft,
            last_saved: Some(saved_at),
            ..self.clone()
        }
    }

    /// Copy repaired for editing: each page's sections sorted by `order` and
    /// renumbered, and a dangling active page pointed at the first page.
    /// Documents written by older editors may be sparse.
    pub fn normalized(&self) -> StoreBuilder {
        let pages: Vec<Page> = self
            .pages
            .iter()
            .map(|page| {
                let mut sections = page.sections.clone();
                sections.sort_by_key(|s| s.order);
                page.with_sections(sections)
            })
            .collect();

        let active_page_id = match self.active_page_id.as_deref() {
            Some(id) if pages.iter().any(|p| p.id == id) => Some(id.to_string()),
            _ => pages.first().map(|p| p.id.clone()),
        };

        StoreBuilder {
            pages,
            active_page_id,
            ..self.clone()
        }
    }

    /// Checks the structural invariants listed in the module docs
    pub fn validate(&self) -> Result<(), crate::ModelError> {
        use crate::ModelError;
        use std::collections::HashSet;

        let mut page_ids = HashSet::new();
        for page in &self.pages {
            if !page_ids.insert(page.id.as_str()) {
                return Err(ModelError::DuplicatePage(page.id.clone()));
            }

            let mut section_ids = HashSet::new();
            for section in &page.sections {
                if !section_ids.insert(section.id.as_str()) {
                    return Err(ModelError::DuplicateSection {
                        page_id: page.id.clone(),
                        section_id: section.id.clone(),
                    });
                }
            }

            if !page.has_dense_order() {
                return Err(ModelError::SparseOrder(page.id.clone()));
            }
        }

        if !self.pages.is_empty() && self.active_page().is_none() {
            return Err(ModelError::DanglingActivePage(
                self.active_page_id.clone().unwrap_or_default(),
            ));
        }

        Ok(())
    }
}
