//! Cached auto-refreshing setting reader
//!
//! Holds one setting's current value in memory and keeps it fresh by
//! subscribing to the change bus. Reads are O(1) and never touch the
//! backing store after construction; writes push the new value here before
//! the writer's `set_value` call returns.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::manager::SettingManager;
use crate::notify::{ChangeBus, SubscriptionId};
use crate::prelude::*;

/// A push-updated in-memory view of one setting's current value.
///
/// Dropping the reader unsubscribes it from the bus.
pub struct CachedSetting {
	name: Box<str>,
	current: Arc<RwLock<SettingValue>>,
	bus: Arc<ChangeBus>,
	subscription: SubscriptionId,
}

impl CachedSetting {
	/// Create a reader for `name`, eagerly reading the current value.
	///
	/// Fails with [`Error::NotFound`] if the setting does not exist yet;
	/// use [`CachedSetting::with_default`] to tolerate that.
	pub async fn new(manager: &SettingManager, name: &str) -> VsResult<Self> {
		let initial = manager.get_value(name).await?;
		Ok(Self::subscribe(manager, name, initial))
	}

	/// Create a reader for `name`, starting from `default` if the setting
	/// does not exist yet. The cache still refreshes on every write.
	pub async fn with_default(
		manager: &SettingManager,
		name: &str,
		default: SettingValue,
	) -> VsResult<Self> {
		let initial = manager.get_value_or(name, default).await?;
		Ok(Self::subscribe(manager, name, initial))
	}

	fn subscribe(manager: &SettingManager, name: &str, initial: SettingValue) -> Self {
		let current = Arc::new(RwLock::new(initial));
		let slot = current.clone();
		let watched: Box<str> = name.into();
		let subscription = manager.bus().subscribe(move |event| {
			if event.name == watched {
				debug!("Cached setting '{}' updated to {}", event.name, event.value);
				*slot.write() = event.value.clone();
			}
		});

		Self { name: name.into(), current, bus: manager.bus().clone(), subscription }
	}

	/// The watched setting name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The last value seen, in O(1), without touching the store
	pub fn get(&self) -> SettingValue {
		self.current.read().clone()
	}
}

impl Drop for CachedSetting {
	fn drop(&mut self) {
		self.bus.unsubscribe(self.subscription);
	}
}

impl std::fmt::Debug for CachedSetting {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CachedSetting")
			.field("name", &self.name)
			.field("current", &*self.current.read())
			.finish()
	}
}

// vim: ts=4
