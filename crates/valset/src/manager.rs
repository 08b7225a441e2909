//! Setting manager
//!
//! Typed read/write API over the record store. Writes validate before they
//! touch the store, replace atomically under a per-name critical section,
//! and publish a change event before returning.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex as AsyncMutex;

use crate::notify::{ChangeBus, ChangeEvent};
use crate::prelude::*;
use crate::registry::FrozenTypeRegistry;
use valset_types::SettingAdapter;

/// Typed read/write API over a [`SettingAdapter`].
///
/// Reads never block writers and may observe the previous value during a
/// concurrent write. Writes to the same name serialize on a per-name lock,
/// and the change event is published inside the critical section so event
/// order matches write order.
#[derive(Debug)]
pub struct SettingManager {
	adapter: Arc<dyn SettingAdapter>,
	registry: Arc<FrozenTypeRegistry>,
	bus: Arc<ChangeBus>,
	write_locks: parking_lot::Mutex<HashMap<Box<str>, Arc<AsyncMutex<()>>>>,
}

impl SettingManager {
	/// Create a manager over `adapter` with the given value type registry
	pub fn new(adapter: Arc<dyn SettingAdapter>, registry: Arc<FrozenTypeRegistry>) -> Self {
		Self {
			adapter,
			registry,
			bus: Arc::new(ChangeBus::new()),
			write_locks: parking_lot::Mutex::new(HashMap::new()),
		}
	}

	/// The change notification bus for this manager
	pub fn bus(&self) -> &Arc<ChangeBus> {
		&self.bus
	}

	/// The value type registry this manager validates against
	pub fn registry(&self) -> &Arc<FrozenTypeRegistry> {
		&self.registry
	}

	/// True iff a live record exists for `name`
	pub async fn exists(&self, name: &str) -> VsResult<bool> {
		self.adapter.exists(name).await
	}

	/// Read the typed value of `name`.
	///
	/// Fails with [`Error::NotFound`] if no record exists.
	pub async fn get_value(&self, name: &str) -> VsResult<SettingValue> {
		let Some(record) = self.adapter.read(name).await? else {
			return Err(Error::NotFound);
		};
		let value_type = self.registry.resolve(&record.type_name)?;
		value_type.parse(&record.raw)
	}

	/// Read the typed value of `name`, or `default` if no record exists.
	///
	/// Other failures still propagate.
	pub async fn get_value_or(&self, name: &str, default: SettingValue) -> VsResult<SettingValue> {
		match self.get_value(name).await {
			Ok(value) => Ok(value),
			Err(Error::NotFound) => Ok(default),
			Err(err) => Err(err),
		}
	}

	/// Write `value` under `name` with the value type named `type_name`.
	///
	/// The value is validated by serializing it before the store is touched;
	/// a validation failure leaves the previous record intact. The replace is
	/// atomic per name, and the change event is published before this call
	/// returns, so cached readers are already fresh for later callers.
	pub async fn set_value(
		&self,
		name: &str,
		type_name: &str,
		value: SettingValue,
	) -> VsResult<()> {
		let value_type = self.registry.resolve(type_name)?;
		let raw = value_type.serialize(&value)?;

		let lock = self.write_lock(name);
		let _guard = lock.lock().await;

		self.adapter.replace(name, type_name, &raw).await?;
		debug!("Set '{}' = {} ({})", name, raw, type_name);
		self.bus.publish(&ChangeEvent { name: name.into(), value });
		Ok(())
	}

	/// Delete the record for `name`.
	///
	/// Fails with [`Error::NotFound`] if no record exists. Deletes publish no
	/// change event: events always carry the value just written, so cached
	/// readers keep the last value they saw.
	pub async fn unset(&self, name: &str) -> VsResult<()> {
		let lock = self.write_lock(name);
		let _guard = lock.lock().await;

		self.adapter.delete(name).await?;
		debug!("Unset '{}'", name);
		Ok(())
	}

	/// Re-serialize the live record of `name` through its value type.
	///
	/// For valid stored data this round-trips the stored bytes.
	pub async fn serialized_value(&self, name: &str) -> VsResult<Box<str>> {
		let Some(record) = self.adapter.read(name).await? else {
			return Err(Error::NotFound);
		};
		let value_type = self.registry.resolve(&record.type_name)?;
		let value = value_type.parse(&record.raw)?;
		value_type.serialize(&value)
	}

	/// List all settings as typed values, optionally restricted to names
	/// starting with `prefix`
	pub async fn list(&self, prefix: Option<&str>) -> VsResult<Vec<(Box<str>, SettingValue)>> {
		let records = self.adapter.list(prefix).await?;
		let mut settings = Vec::with_capacity(records.len());
		for record in records {
			let value_type = self.registry.resolve(&record.type_name)?;
			let value = value_type.parse(&record.raw)?;
			settings.push((record.name, value));
		}
		Ok(settings)
	}

	// One lock per distinct name; the table is bounded by the number of
	// settings ever written through this manager.
	fn write_lock(&self, name: &str) -> Arc<AsyncMutex<()>> {
		let mut locks = self.write_locks.lock();
		locks.entry(name.into()).or_default().clone()
	}
}

// vim: ts=4
