//! # Shelf Editor
//!
//! Editing engine for storefront builder documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ session: selection, viewport, persistence   │
//! │  - add/move/toggle sections                 │
//! │  - save draft / publish / load              │
//! │  - undo/redo shortcuts                      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ history: past / present / future snapshots  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ actions: one edit → one new document        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are values**: an edit never touches the document it was
//!    applied to, so every `past` entry stays a valid document
//! 2. **Rejected actions are no-ops**: a stale page or section id leaves the
//!    history exactly as it was
//! 3. **UI state is not history**: selection, viewport and mode survive undo
//! 4. **Storage is injected**: the session only sees [`BuilderStore`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_editor::{BuilderSession, MemoryStore};
//! use shelf_model::{ComponentRegistry, SectionType};
//!
//! let mut session = BuilderSession::new(
//!     "store-1",
//!     Arc::new(ComponentRegistry::builtin()),
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let hero = session.add_component(&SectionType::Hero)?;
//! session.select_section(Some(&hero));
//! session.save_draft()?;
//! session.publish()?;
//! ```

pub mod actions;
pub mod errors;
pub mod events;
pub mod history;
pub mod notifications;
pub mod preview;
pub mod session;
pub mod shortcuts;
pub mod storage;

pub use actions::{Action, ActionError};
pub use errors::SessionError;
pub use events::{ChangeBroadcaster, ChangeEvent, ChangeListener, EventLog};
pub use history::{BuilderHistory, MAX_HISTORY};
pub use notifications::{Notification, NotificationLevel};
pub use preview::{PreviewMode, SessionMode};
pub use session::{BuilderSession, LoadSource, MAX_NOTIFICATIONS};
pub use shortcuts::{KeyEvent, KeyListenerRegistry, ListenerTable, Shortcut, ShortcutGuard};
pub use storage::{draft_key, BuilderStore, MemoryStore, StorageError};
