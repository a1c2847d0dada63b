//! Fan-out of publish events to async consumers (open storefront views).

use shelf_editor::{ChangeEvent, ChangeListener};
use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// A [`ChangeListener`] that forwards every event onto a tokio broadcast
/// channel. Cloning shares the channel.
#[derive(Debug, Clone)]
pub struct ChangeChannel {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeChannel {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// New receiver seeing events emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeListener for ChangeChannel {
    fn on_change(&self, event: &ChangeEvent) {
        // No receivers is fine: nobody has a storefront open
        match self.sender.send(event.clone()) {
            Ok(receivers) => debug!(receivers, "Forwarded change event"),
            Err(_) => debug!("Change event dropped, no receivers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_model::StoreRecord;

    #[tokio::test]
    async fn test_forwards_to_every_receiver() {
        let channel = ChangeChannel::new();
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();
        assert_eq!(channel.receiver_count(), 2);

        let event = ChangeEvent::Store(StoreRecord::new("s1", "u1", "Shop", "shop"));
        channel.on_change(&event);

        assert_eq!(first.recv().await.unwrap(), event);
        assert_eq!(second.recv().await.unwrap(), event);
    }

    #[test]
    fn test_emit_without_receivers() {
        let channel = ChangeChannel::default();
        channel.on_change(&ChangeEvent::Store(StoreRecord::new("s1", "u1", "Shop", "shop")));
        assert_eq!(channel.receiver_count(), 0);
    }
}
