//! # Keyboard Shortcuts
//!
//! Undo is ctrl/cmd+Z; redo is ctrl/cmd+Shift+Z or ctrl/cmd+Y.
//!
//! The builder claims the host's key listener while its view is open. The
//! claim is a [`ShortcutGuard`]: binding registers the listener and dropping
//! the guard removes it, so teardown cannot leak a listener.

use std::collections::BTreeMap;
use tracing::debug;

/// Listener name the builder registers under
pub const BUILDER_LISTENER: &str = "builder-shortcuts";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    pub fn from_key_event(event: &KeyEvent) -> Option<Shortcut> {
        if !(event.ctrl || event.meta) {
            return None;
        }

        // Shift reports an upper-case key on most platforms
        match event.key.to_ascii_lowercase().as_str() {
            "z" if event.shift => Some(Shortcut::Redo),
            "z" => Some(Shortcut::Undo),
            "y" => Some(Shortcut::Redo),
            _ => None,
        }
    }
}

pub type ListenerId = u64;

/// The host's global key-listener table
pub trait KeyListenerRegistry {
    fn add_listener(&mut self, name: &str) -> ListenerId;
    fn remove_listener(&mut self, id: ListenerId);
}

/// Scoped registration; unbinds on drop
#[derive(Debug)]
pub struct ShortcutGuard<'r, R: KeyListenerRegistry + ?Sized> {
    registry: &'r mut R,
    id: ListenerId,
}

impl<'r, R: KeyListenerRegistry + ?Sized> ShortcutGuard<'r, R> {
    pub fn bind(registry: &'r mut R, name: &str) -> Self {
        let id = registry.add_listener(name);
        debug!(listener = name, id, "Bound key listener");
        Self { registry, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<R: KeyListenerRegistry + ?Sized> Drop for ShortcutGuard<'_, R> {
    fn drop(&mut self) {
        self.registry.remove_listener(self.id);
        debug!(id = self.id, "Unbound key listener");
    }
}

/// In-process listener table
#[derive(Debug, Default)]
pub struct ListenerTable {
    next_id: ListenerId,
    active: BTreeMap<ListenerId, String>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.active.values().any(|bound| bound == name)
    }
}

impl KeyListenerRegistry for ListenerTable {
    fn add_listener(&mut self, name: &str) -> ListenerId {
        self.next_id += 1;
        self.active.insert(self.next_id, name.to_string());
        self.next_id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.active.remove(&id);
    }
}
