//! Event bus built on mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Menus and delegates publish events via `EventPublisher::publish()`
//! - The main thread drains events via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::trace;

use super::types::AppEvent;

/// Event bus for application-wide event distribution.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
///
/// # Example
///
/// ```
/// use sitewrap::events::{EventBus, AppEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::Reload);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and handed to producers.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot happen while it lives
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender.
    ///
    /// Used by the global access module to create publishers from the static sender.
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event to the bus.
    ///
    /// If the receiver has been dropped (app shutting down), the send
    /// silently fails.
    pub fn publish(&self, event: AppEvent) {
        trace!(event = event.description(), "publish");
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::GoBack);
        publisher.publish(AppEvent::Reload);
        publisher.publish(AppEvent::OpenExternal("https://example.com".into()));

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::GoBack,
                AppEvent::Reload,
                AppEvent::OpenExternal("https://example.com".into()),
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::GoForward);

        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publisher_clone_is_independent() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(AppEvent::GoBack);
        pub2.publish(AppEvent::GoForward);

        assert_eq!(bus.drain().len(), 2);
    }

    #[test]
    fn test_try_recv_returns_events_in_order() {
        let bus = EventBus::default();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::Reload);
        publisher.publish(AppEvent::LoadFinished(Some("https://a.test/".into())));

        assert_eq!(bus.try_recv(), Some(AppEvent::Reload));
        assert_eq!(
            bus.try_recv(),
            Some(AppEvent::LoadFinished(Some("https://a.test/".into())))
        );
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);

        publisher.publish(AppEvent::Reload);
    }
}
