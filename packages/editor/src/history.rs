//! # Builder History
//!
//! Snapshot-based undo/redo over whole [`StoreBuilder`] documents.
//!
//! ## Design
//!
//! - `present` is the document being edited
//! - each structural action pushes the old `present` onto `past` and
//!   clears `future`
//! - `past` holds at most `max_history` snapshots; the oldest are dropped
//! - undo pops `past` into `present` and puts the old `present` at the
//!   front of `future`; redo is the mirror image
//! - a rejected action leaves all three untouched
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = BuilderHistory::new(StoreBuilder::default_document());
//!
//! history.dispatch(&Action::AddSection { page_id, section })?;
//! assert!(history.can_undo());
//!
//! let history = history.apply(&Action::Undo);
//! assert!(history.can_redo());
//! ```

use crate::actions::{Action, ActionError};
use shelf_model::StoreBuilder;
use std::collections::VecDeque;
use tracing::debug;

/// Default number of undo levels
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct BuilderHistory {
    /// Earlier snapshots, oldest first
    past: VecDeque<StoreBuilder>,

    present: StoreBuilder,

    /// Undone snapshots, next redo first
    future: VecDeque<StoreBuilder>,

    /// Maximum length of `past` (0 = unlimited)
    max_history: usize,
}

impl BuilderHistory {
    pub fn new(present: StoreBuilder) -> Self {
        Self::with_max_levels(present, MAX_HISTORY)
    }

    pub fn with_max_levels(present: StoreBuilder, max_history: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
            max_history,
        }
    }

    /// Reducer form: the history after `action`. Rejected actions return
    /// the history unchanged.
    pub fn apply(mut self, action: &Action) -> Self {
        let _ = self.dispatch(action);
        self
    }

    /// Like [`apply`](Self::apply) but reports why an action was rejected
    pub fn try_apply(&self, action: &Action) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.dispatch(action)?;
        Ok(next)
    }

    /// Apply `action` in place
    pub fn dispatch(&mut self, action: &Action) -> Result<(), ActionError> {
        let result = match action {
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::LoadBuilder { builder } => {
                self.reset(builder.normalized());
                Ok(())
            }
            Action::SetActivePage { .. } => {
                self.present = action.edit(&self.present)?;
                Ok(())
            }
            _ => {
                let next = action.edit(&self.present)?;
                self.record(next);
                Ok(())
            }
        };

        match &result {
            Ok(()) => debug!(
                action = action.name(),
                past = self.past.len(),
                future = self.future.len(),
                "Applied builder action"
            ),
            Err(error) => debug!(action = action.name(), %error, "Builder action ignored"),
        }
        result
    }

    /// Push `next` as the new present
    fn record(&mut self, next: StoreBuilder) {
        let previous = std::mem::replace(&mut self.present, next);
        self.push_past(previous);

        // New edit invalidates the redo branch
        self.future.clear();
    }

    fn push_past(&mut self, snapshot: StoreBuilder) {
        self.past.push_back(snapshot);
        if self.max_history > 0 {
            while self.past.len() > self.max_history {
                self.past.pop_front();
            }
        }
    }

    fn undo(&mut self) -> Result<(), ActionError> {
        let previous = self
            .past
            .pop_back()
            .ok_or(ActionError::HistoryExhausted("undo"))?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        Ok(())
    }

    fn redo(&mut self) -> Result<(), ActionError> {
        let next = self
            .future
            .pop_front()
            .ok_or(ActionError::HistoryExhausted("redo"))?;
        let current = std::mem::replace(&mut self.present, next);
        self.push_past(current);
        Ok(())
    }

    /// Replace the document and drop all history
    pub fn reset(&mut self, present: StoreBuilder) {
        self.past.clear();
        self.future.clear();
        self.present = present;
    }

    pub fn present(&self) -> &StoreBuilder {
        &self.present
    }

    pub fn past(&self) -> &VecDeque<StoreBuilder> {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<StoreBuilder> {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for BuilderHistory {
    fn default() -> Self {
        Self::new(StoreBuilder::default_document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_model::{GlobalStylesPatch, NewPage, Section, SectionType, HOME_PAGE_ID};

    fn add(id: &str) -> Action {
        Action::AddSection {
            page_id: HOME_PAGE_ID.to_string(),
            section: Section::new(id, SectionType::Text),
        }
    }

    #[test]
    fn test_history_creation() {
        let history = BuilderHistory::default();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.max_history(), MAX_HISTORY);
    }

    #[test]
    fn test_apply_and_undo() {
        let start = StoreBuilder::default_document();
        let history = BuilderHistory::new(start.clone()).apply(&add("a"));

        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.present().pages[0].sections.len(), 1);
        assert_eq!(history.past()[0], start);

        let history = history.apply(&Action::Undo);
        assert_eq!(history.present(), &start);
        assert_eq!(history.redo_levels(), 1);

        let history = history.apply(&Action::Redo);
        assert_eq!(history.present().pages[0].sections[0].id, "a");
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let history = BuilderHistory::default()
            .apply(&add("a"))
            .apply(&add("b"))
            .apply(&Action::Undo);
        assert_eq!(history.redo_levels(), 1);

        let history = history.apply(&Action::UpdateGlobalStyles {
            patch: GlobalStylesPatch {
                primary_color: Some("#000000".to_string()),
                ..Default::default()
            },
        });
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = BuilderHistory::with_max_levels(StoreBuilder::default_document(), 2);
        for i in 0..3 {
            history.dispatch(&add(&format!("s{}", i))).unwrap();
        }
        assert_eq!(history.undo_levels(), 2);
        assert_eq!(history.past()[0].pages[0].sections.len(), 1);
    }

    #[test]
    fn test_redo_respects_bound() {
        let mut history = BuilderHistory::with_max_levels(StoreBuilder::default_document(), 1);
        history.dispatch(&add("a")).unwrap();
        history.dispatch(&add("b")).unwrap();
        history.dispatch(&Action::Undo).unwrap();
        history.dispatch(&Action::Redo).unwrap();
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_exhausted_history_is_a_no_op() {
        let history = BuilderHistory::default();
        assert_eq!(
            history.try_apply(&Action::Undo),
            Err(ActionError::HistoryExhausted("undo"))
        );
        assert_eq!(history.clone().apply(&Action::Redo), history);
    }

    #[test]
    fn test_rejected_action_changes_nothing() {
        let history = BuilderHistory::default().apply(&add("a")).apply(&Action::Undo);
        let after = history.clone().apply(&Action::RemoveSection {
            page_id: HOME_PAGE_ID.to_string(),
            section_id: "missing".to_string(),
        });
        assert_eq!(after, history);
        assert!(after.can_redo());
    }

    #[test]
    fn test_set_active_page_is_not_recorded() {
        let history = BuilderHistory::default().apply(&Action::AddPage {
            page: NewPage::new("Product", "/product"),
        });
        assert_eq!(history.undo_levels(), 1);

        let history = history.apply(&Action::SetActivePage {
            page_id: HOME_PAGE_ID.to_string(),
        });
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.present().active_page_id.as_deref(), Some(HOME_PAGE_ID));
    }

    #[test]
    fn test_load_builder_resets_history() {
        let loaded = StoreBuilder {
            draft: false,
            ..StoreBuilder::default_document()
        };
        let history = BuilderHistory::default()
            .apply(&add("a"))
            .apply(&add("b"))
            .apply(&Action::Undo)
            .apply(&Action::LoadBuilder {
                builder: Box::new(loaded.clone()),
            });

        assert_eq!(history.present(), &loaded);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
