//! # Builder Session
//!
//! One merchant's editing session over one store's document.
//!
//! The session owns the [`BuilderHistory`] and layers ephemeral UI state on
//! top of it: the selected section, the preview viewport, the
//! editing/previewing mode and a queue of notifications for the host to
//! show. None of that state is part of undo history.
//!
//! Persistence goes through the injected [`BuilderStore`]. Storage failures
//! are turned into error notifications and returned to the caller; the
//! in-memory document is never rolled back or modified by them.

use crate::actions::{Action, ActionError};
use crate::errors::SessionError;
use crate::events::{ChangeBroadcaster, ChangeEvent, ChangeListener};
use crate::history::BuilderHistory;
use crate::notifications::Notification;
use crate::preview::{PreviewMode, SessionMode};
use crate::shortcuts::{KeyEvent, KeyListenerRegistry, Shortcut, ShortcutGuard, BUILDER_LISTENER};
use crate::storage::{BuilderStore, StorageError};
use chrono::Utc;
use shelf_model::{
    ComponentRegistry, GlobalStylesPatch, IdGenerator, NewPage, Page, PagePatch, Product, Section,
    SectionPatch, SectionType, StoreBuilder, StoreRecord,
};
use shelf_renderer::{RenderContext, StorefrontRenderer, VirtualDocument};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Pending notifications kept before the oldest are dropped
pub const MAX_NOTIFICATIONS: usize = 32;

/// Where [`BuilderSession::load_for_store`] found the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Published,
    Draft,
    Default,
}

pub struct BuilderSession {
    store_id: String,
    history: BuilderHistory,
    registry: Arc<ComponentRegistry>,
    storage: Arc<dyn BuilderStore>,
    broadcaster: ChangeBroadcaster,

    /// Issues section ids for components added in this session
    ids: IdGenerator,

    selected_section_id: Option<String>,
    preview_mode: PreviewMode,
    mode: SessionMode,
    notifications: VecDeque<Notification>,
}

impl BuilderSession {
    pub fn new(
        store_id: impl Into<String>,
        registry: Arc<ComponentRegistry>,
        storage: Arc<dyn BuilderStore>,
    ) -> Self {
        let store_id = store_id.into();
        Self {
            ids: IdGenerator::new(&store_id),
            store_id,
            history: BuilderHistory::new(StoreBuilder::default_document()),
            registry,
            storage,
            broadcaster: ChangeBroadcaster::new(),
            selected_section_id: None,
            preview_mode: PreviewMode::default(),
            mode: SessionMode::default(),
            notifications: VecDeque::new(),
        }
    }

    /// Rebuild the history with a different undo bound, keeping the document
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        let present = self.history.present().clone();
        self.history = BuilderHistory::with_max_levels(present, max_history);
        self
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.broadcaster.subscribe(listener);
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn builder(&self) -> &StoreBuilder {
        self.history.present()
    }

    pub fn history(&self) -> &BuilderHistory {
        &self.history
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.history.present().active_page()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ----- Document edits -----

    /// Apply `action` to the history and repair the selection afterwards
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let result = self.history.dispatch(&action);
        self.reconcile_selection();
        result
    }

    pub fn undo(&mut self) -> bool {
        self.dispatch(Action::Undo).is_ok()
    }

    pub fn redo(&mut self) -> bool {
        self.dispatch(Action::Redo).is_ok()
    }

    /// Stamp a new section of `section_type` at the end of the active page.
    /// Returns the new section's id.
    pub fn add_component(&mut self, section_type: &SectionType) -> Result<String, SessionError> {
        let page_id = self.active_page_id()?;
        let order = self.active_page().map_or(0, |page| page.sections.len());
        let id = self.next_section_id();

        let (section, name) = match self.registry.get(section_type) {
            Some(definition) => (definition.stamp(id.clone(), order), definition.name.clone()),
            None => return Err(SessionError::UnknownSectionType(section_type.to_string())),
        };

        self.dispatch(Action::AddSection { page_id, section })?;
        self.notify(Notification::success(format!("{} added!", name)));
        Ok(id)
    }

    pub fn remove_section(&mut self, section_id: &str) -> Result<(), SessionError> {
        let page_id = self.active_page_id()?;
        self.dispatch(Action::RemoveSection {
            page_id,
            section_id: section_id.to_string(),
        })?;
        self.notify(Notification::success("Section removed"));
        Ok(())
    }

    pub fn update_section(
        &mut self,
        section_id: &str,
        patch: SectionPatch,
    ) -> Result<(), SessionError> {
        let page_id = self.active_page_id()?;
        self.dispatch(Action::UpdateSection {
            page_id,
            section_id: section_id.to_string(),
            patch,
        })?;
        self.notify(Notification::success("Section updated!"));
        Ok(())
    }

    /// Set one settings key on a section of the active page
    pub fn set_section_setting(
        &mut self,
        section_id: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), SessionError> {
        let page_id = self.active_page_id()?;
        let mut settings = self.active_section(section_id)?.settings.clone();
        settings.insert(key.to_string(), value);

        self.dispatch(Action::UpdateSection {
            page_id,
            section_id: section_id.to_string(),
            patch: SectionPatch::settings(settings),
        })?;
        Ok(())
    }

    /// Flip a section's visibility; returns the new value
    pub fn toggle_visibility(&mut self, section_id: &str) -> Result<bool, SessionError> {
        let page_id = self.active_page_id()?;
        let visible = !self.active_section(section_id)?.visible;

        self.dispatch(Action::UpdateSection {
            page_id,
            section_id: section_id.to_string(),
            patch: SectionPatch::visibility(visible),
        })?;
        self.notify(Notification::success(if visible {
            "Section visible"
        } else {
            "Section hidden"
        }));
        Ok(visible)
    }

    /// Drag-and-drop move of one section to `to_index` (clamped to the end)
    pub fn move_section(&mut self, section_id: &str, to_index: usize) -> Result<(), SessionError> {
        let page_id = self.active_page_id()?;
        let mut ids: Vec<String> = self
            .active_page()
            .map(|page| page.sections.iter().map(|s| s.id.clone()).collect())
            .unwrap_or_default();

        let from = ids
            .iter()
            .position(|id| id == section_id)
            .ok_or_else(|| SessionError::SectionNotFound(section_id.to_string()))?;
        let to = to_index.min(ids.len() - 1);
        if from == to {
            return Ok(());
        }

        let moved = ids.remove(from);
        ids.insert(to, moved);

        self.dispatch(Action::ReorderSections {
            page_id,
            section_ids: ids,
        })?;
        self.notify(Notification::success("Section reordered"));
        Ok(())
    }

    pub fn reorder_sections(&mut self, section_ids: Vec<String>) -> Result<(), SessionError> {
        let page_id = self.active_page_id()?;
        self.dispatch(Action::ReorderSections {
            page_id,
            section_ids,
        })?;
        Ok(())
    }

    pub fn update_global_styles(&mut self, patch: GlobalStylesPatch) -> Result<(), SessionError> {
        self.dispatch(Action::UpdateGlobalStyles { patch })?;
        Ok(())
    }

    /// Create a page and switch to it; returns its id
    pub fn add_page(&mut self, page: NewPage) -> Result<String, SessionError> {
        self.dispatch(Action::AddPage { page })?;
        self.active_page_id()
    }

    pub fn remove_page(&mut self, page_id: &str) -> Result<(), SessionError> {
        self.dispatch(Action::RemovePage {
            page_id: page_id.to_string(),
        })?;
        Ok(())
    }

    pub fn update_page(&mut self, page_id: &str, patch: PagePatch) -> Result<(), SessionError> {
        self.dispatch(Action::UpdatePage {
            page_id: page_id.to_string(),
            patch,
        })?;
        Ok(())
    }

    pub fn set_active_page(&mut self, page_id: &str) -> Result<(), SessionError> {
        self.dispatch(Action::SetActivePage {
            page_id: page_id.to_string(),
        })?;
        Ok(())
    }

    /// Replace the document with a fresh default one and drop history
    pub fn reset(&mut self) {
        self.history.reset(StoreBuilder::default_document());
        self.selected_section_id = None;
        debug!(store_id = %self.store_id, "Builder reset");
    }

    // ----- Selection & viewport -----

    /// Select a section of the active page, or clear the selection. Ids not
    /// on the active page clear it. Returns whether a section is selected.
    pub fn select_section(&mut self, section_id: Option<&str>) -> bool {
        self.selected_section_id = section_id
            .filter(|id| self.active_page().map_or(false, |page| page.contains_section(id)))
            .map(str::to_string);
        self.selected_section_id.is_some()
    }

    pub fn selected_section_id(&self) -> Option<&str> {
        self.selected_section_id.as_deref()
    }

    pub fn selected_section(&self) -> Option<&Section> {
        let id = self.selected_section_id.as_deref()?;
        self.active_page()?.section(id)
    }

    pub fn set_preview_mode(&mut self, preview_mode: PreviewMode) {
        self.preview_mode = preview_mode;
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    pub fn viewport_width(&self) -> &'static str {
        self.preview_mode.width()
    }

    pub fn set_mode(&mut self, mode: SessionMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> SessionMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Render the active page for the canvas. Editing renders inert;
    /// previewing renders as the storefront would.
    pub fn render_canvas(&self, products: &[Product]) -> Option<VirtualDocument> {
        let builder = self.history.present();
        let page = builder.active_page()?;
        let ctx = RenderContext::new(products, &builder.global_styles)
            .preview(self.mode.renders_inert());

        Some(StorefrontRenderer::new(&self.registry).render_page_with_css(
            page,
            &ctx,
            builder.custom_css.as_deref(),
        ))
    }

    // ----- Keyboard -----

    /// Claim the host key listener while the builder view is open
    pub fn bind_shortcuts<'r, R: KeyListenerRegistry + ?Sized>(
        &self,
        registry: &'r mut R,
    ) -> ShortcutGuard<'r, R> {
        ShortcutGuard::bind(registry, BUILDER_LISTENER)
    }

    /// Run the undo/redo shortcut `event` maps to, if any
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Shortcut> {
        let shortcut = Shortcut::from_key_event(event)?;
        match shortcut {
            Shortcut::Undo => self.undo(),
            Shortcut::Redo => self.redo(),
        };
        Some(shortcut)
    }

    // ----- Persistence -----

    /// Write the current document to the store's draft slot
    pub fn save_draft(&mut self) -> Result<StoreBuilder, SessionError> {
        let draft = self.history.present().stamped(true, Utc::now());
        let saved = self.storage.save_draft(&self.store_id, &draft);
        self.persisted(saved, "Failed to save draft")?;

        debug!(store_id = %self.store_id, "Draft saved");
        self.notify(Notification::success("Draft saved!"));
        Ok(draft)
    }

    /// Promote the current document to the store's live builder
    pub fn publish(&mut self) -> Result<StoreRecord, SessionError> {
        let lookup = self.storage.get_store(&self.store_id);
        let store = match self.persisted(lookup, "Failed to publish store")? {
            Some(store) => store,
            None => {
                warn!(store_id = %self.store_id, "Publish target not found");
                self.notify(Notification::error("Store not found"));
                return Err(SessionError::StoreNotFound(self.store_id.clone()));
            }
        };

        let now = Utc::now();
        let published = store.published(self.history.present().stamped(false, now), now);
        let written = self.storage.put_store(&published);
        self.persisted(written, "Failed to publish store")?;

        if let Err(error) = self.storage.clear_draft(&self.store_id) {
            warn!(store_id = %self.store_id, %error, "Published but draft was not cleared");
        }

        let listeners = self.broadcaster.emit(&ChangeEvent::Store(published.clone()));
        info!(store_id = %self.store_id, listeners, "Store published");
        self.notify(Notification::success("Store published!"));
        Ok(published)
    }

    /// Load the store's published document, else its saved draft, else a
    /// fresh default. History starts empty either way.
    pub fn load_for_store(&mut self) -> Result<LoadSource, SessionError> {
        let lookup = self.storage.get_store(&self.store_id);
        let store = self.persisted(lookup, "Failed to load store")?;

        let (builder, source) = match store.and_then(|store| store.builder) {
            Some(builder) => (builder, LoadSource::Published),
            None => {
                let draft = self.storage.load_draft(&self.store_id);
                match self.persisted(draft, "Failed to load draft")? {
                    Some(draft) => {
                        self.notify(Notification::info("Draft loaded"));
                        (draft, LoadSource::Draft)
                    }
                    None => (StoreBuilder::default_document(), LoadSource::Default),
                }
            }
        };

        self.dispatch(Action::LoadBuilder {
            builder: Box::new(builder),
        })?;
        info!(store_id = %self.store_id, ?source, "Builder loaded");
        Ok(source)
    }

    /// Load the store's saved draft when one exists, else fall back to
    /// [`load_for_store`](Self::load_for_store). Used to keep editing
    /// unpublished work after the store has gone live.
    pub fn resume_draft(&mut self) -> Result<LoadSource, SessionError> {
        let draft = self.storage.load_draft(&self.store_id);
        let Some(draft) = self.persisted(draft, "Failed to load draft")? else {
            return self.load_for_store();
        };

        self.dispatch(Action::LoadBuilder {
            builder: Box::new(draft),
        })?;
        self.notify(Notification::info("Draft loaded"));
        info!(store_id = %self.store_id, source = ?LoadSource::Draft, "Builder loaded");
        Ok(LoadSource::Draft)
    }

    // ----- Notifications -----

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Hand every pending notification to the host
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    fn notify(&mut self, notification: Notification) {
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
        self.notifications.push_back(notification);
    }

    /// Surface a storage failure as an error notification
    fn persisted<T>(
        &mut self,
        result: Result<T, StorageError>,
        failure: &str,
    ) -> Result<T, SessionError> {
        result.map_err(|error| {
            warn!(store_id = %self.store_id, %error, "{}", failure);
            self.notify(Notification::error(failure));
            SessionError::Storage(error)
        })
    }

    // ----- Internals -----

    fn active_page_id(&self) -> Result<String, SessionError> {
        self.active_page()
            .map(|page| page.id.clone())
            .ok_or(SessionError::NoActivePage)
    }

    fn active_section(&self, section_id: &str) -> Result<&Section, SessionError> {
        self.active_page()
            .and_then(|page| page.section(section_id))
            .ok_or_else(|| SessionError::SectionNotFound(section_id.to_string()))
    }

    fn next_section_id(&mut self) -> String {
        let taken: HashSet<&str> = self
            .history
            .present()
            .pages
            .iter()
            .flat_map(|page| page.sections.iter().map(|s| s.id.as_str()))
            .collect();
        self.ids.new_unique_id(&taken)
    }

    /// Selection never points at a section missing from the active page
    fn reconcile_selection(&mut self) {
        let Some(id) = self.selected_section_id.as_deref() else {
            return;
        };
        let still_there = self
            .active_page()
            .map_or(false, |page| page.contains_section(id));

        if !still_there {
            debug!(section_id = id, "Clearing stale selection");
            self.selected_section_id = None;
        }
    }
}

impl std::fmt::Debug for BuilderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderSession")
            .field("store_id", &self.store_id)
            .field("undo_levels", &self.history.undo_levels())
            .field("redo_levels", &self.history.redo_levels())
            .field("selected_section_id", &self.selected_section_id)
            .field("preview_mode", &self.preview_mode)
            .field("mode", &self.mode)
            .finish()
    }
}
