//! Change notification bus
//!
//! In-process publish/subscribe channel for setting changes. Lifetime is the
//! process lifetime; nothing is persisted. Delivery is synchronous on the
//! publisher's call stack, in registration order, so a subscriber sees a
//! write before the write call returns to its caller.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A setting change, published on every successful write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
	/// Name of the setting that changed
	pub name: Box<str>,
	/// The value just written
	pub value: SettingValue,
}

/// Handle identifying one subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

struct Subscriber {
	id: SubscriptionId,
	handler: Handler,
}

/// Process-wide publish/subscribe channel for setting changes.
///
/// Handlers are owned by the bus, so a subscription survives the scope that
/// registered it until it is explicitly unsubscribed. A panicking handler is
/// isolated and logged; delivery to the remaining subscribers continues.
#[derive(Default)]
pub struct ChangeBus {
	subscribers: RwLock<Vec<Subscriber>>,
	next_id: AtomicU64,
}

impl ChangeBus {
	/// Create an empty bus
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a handler, called for every published change.
	///
	/// The returned id can be passed to [`ChangeBus::unsubscribe`].
	pub fn subscribe(
		&self,
		handler: impl Fn(&ChangeEvent) + Send + Sync + 'static,
	) -> SubscriptionId {
		let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
		self.subscribers.write().push(Subscriber { id, handler: Box::new(handler) });
		id
	}

	/// Remove a subscription. Returns false if the id is not registered.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.subscribers.write();
		let before = subscribers.len();
		subscribers.retain(|sub| sub.id != id);
		subscribers.len() < before
	}

	/// Deliver an event to all subscribers, in registration order
	pub fn publish(&self, event: &ChangeEvent) {
		let subscribers = self.subscribers.read();
		for sub in subscribers.iter() {
			if catch_unwind(AssertUnwindSafe(|| (sub.handler)(event))).is_err() {
				warn!(
					"Change handler {:?} panicked for setting '{}', skipping",
					sub.id, event.name
				);
			}
		}
		debug!("Published change of '{}' to {} subscribers", event.name, subscribers.len());
	}

	/// Number of currently registered subscriptions
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.read().len()
	}
}

impl std::fmt::Debug for ChangeBus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ChangeBus")
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	fn event(name: &str, value: i64) -> ChangeEvent {
		ChangeEvent { name: name.into(), value: SettingValue::Integer(value) }
	}

	#[test]
	fn test_delivery_in_registration_order() {
		let bus = ChangeBus::new();
		let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

		for tag in ["first", "second", "third"] {
			let seen = seen.clone();
			bus.subscribe(move |_| seen.lock().push(tag));
		}

		bus.publish(&event("x", 1));
		assert_eq!(*seen.lock(), vec!["first", "second", "third"]);
	}

	#[test]
	fn test_unsubscribe() {
		let bus = ChangeBus::new();
		let seen = Arc::new(parking_lot::Mutex::new(0u32));

		let seen2 = seen.clone();
		let id = bus.subscribe(move |_| *seen2.lock() += 1);
		assert_eq!(bus.subscriber_count(), 1);

		bus.publish(&event("x", 1));
		assert!(bus.unsubscribe(id));
		bus.publish(&event("x", 2));

		assert_eq!(*seen.lock(), 1);
		assert_eq!(bus.subscriber_count(), 0);
		assert!(!bus.unsubscribe(id));
	}

	#[test]
	fn test_panicking_subscriber_is_isolated() {
		let bus = ChangeBus::new();
		let seen = Arc::new(parking_lot::Mutex::new(0u32));

		bus.subscribe(|_| panic!("broken handler"));
		let seen2 = seen.clone();
		bus.subscribe(move |_| *seen2.lock() += 1);

		bus.publish(&event("x", 1));
		assert_eq!(*seen.lock(), 1);
	}

	#[test]
	fn test_subscription_outlives_registering_scope() {
		let bus = ChangeBus::new();
		let seen = Arc::new(parking_lot::Mutex::new(0u32));

		{
			let seen = seen.clone();
			bus.subscribe(move |_| *seen.lock() += 1);
			// Closure scope ends here; the bus keeps the handler alive
		}

		bus.publish(&event("x", 1));
		assert_eq!(*seen.lock(), 1);
	}
}

// vim: ts=4
