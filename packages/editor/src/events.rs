//! # Change Notification
//!
//! Publishing emits one [`ChangeEvent`] to every subscribed
//! [`ChangeListener`]. Listeners are owned by the broadcaster and invoked in
//! subscription order; what they do with the event (refresh a storefront
//! tab, forward it over a channel) is up to the host.

use serde::{Deserialize, Serialize};
use shelf_model::StoreRecord;
use std::sync::{Arc, Mutex};

/// Wire shape `{ "type": "store", "data": <store record> }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChangeEvent {
    Store(StoreRecord),
}

pub trait ChangeListener: std::fmt::Debug + Send + Sync {
    fn on_change(&self, event: &ChangeEvent);
}

#[derive(Debug, Default)]
pub struct ChangeBroadcaster {
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl ChangeBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Deliver `event` to every listener; returns how many were notified
    pub fn emit(&self, event: &ChangeEvent) -> usize {
        for listener in &self.listeners {
            listener.on_change(event);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Listener that keeps every event it receives; clones share the log
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ChangeEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ChangeListener for EventLog {
    fn on_change(&self, event: &ChangeEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
