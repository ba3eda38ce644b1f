//! Global access to the application event bus.
//!
//! Objective-C callbacks (menu actions, delegate methods) have no Rust
//! context to carry a publisher in, so the bus is reachable statically.
//! It must be initialized once at startup via `init_event_bus()`.
//!
//! # Design
//!
//! - The [`EventBus`] is stored in a `Mutex`, only drained from the main thread
//! - A publisher cloned from it is stored separately so publishing never
//!   contends with a drain in progress

use std::sync::{Mutex, OnceLock};

use tracing::warn;

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns false if it was already initialized; the existing bus is kept.
pub fn init_event_bus() -> bool {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    if BUS.set(Mutex::new(bus)).is_err() {
        return false;
    }
    PUBLISHER.set(publisher).is_ok()
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` if `init_event_bus()` has not been called.
pub fn publisher() -> Option<EventPublisher> {
    PUBLISHER.get().cloned()
}

/// Publish an event to the global event bus.
///
/// Events published before initialization are dropped with a warning.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => warn!(event = event.description(), "event bus not initialized, dropping event"),
    }
}

/// Run `f` against the global bus, recovering from a poisoned lock.
fn with_bus<R>(f: impl FnOnce(&EventBus) -> R) -> Option<R> {
    let bus = BUS.get()?;
    let bus = bus.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    Some(f(&bus))
}

/// Drain all pending events from the global event bus, in publish order.
///
/// Empty if the bus has not been initialized.
pub fn drain_events() -> Vec<AppEvent> {
    with_bus(EventBus::drain).unwrap_or_default()
}
