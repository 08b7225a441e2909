//! Adapter trait for the durable setting record store.
//!
//! The store keeps one live record per setting name: the serialized value
//! plus the value type tag stored alongside the name. Implementations decide
//! the durable format; the trait only requires an atomic create-or-replace
//! primitive so writers never leave zero or two live records behind.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One persisted setting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSetting {
	/// Setting name, unique within the store
	pub name: Box<str>,
	/// Display name of the value type the record was written with
	pub type_name: Box<str>,
	/// Serialized value in the value type's canonical text form
	pub raw: Box<str>,
}

/// Durable key/record store for setting records.
///
/// Contract:
/// - `name` is a unique key; at most one live record exists per name.
/// - `replace` is atomic with respect to concurrent calls for the same name.
/// - `read` fails with [`Error::Consistency`] if a backend ever yields more
///   than one live record for a name.
#[async_trait]
pub trait SettingAdapter: Send + Sync + Debug {
	/// True iff a live record exists for `name`
	async fn exists(&self, name: &str) -> VsResult<bool>;

	/// Read the live record for `name`, or `None` if absent
	async fn read(&self, name: &str) -> VsResult<Option<StoredSetting>>;

	/// Atomically create or replace the record for `name`
	async fn replace(&self, name: &str, type_name: &str, raw: &str) -> VsResult<()>;

	/// Delete the record for `name`; fails with [`Error::NotFound`] if absent
	async fn delete(&self, name: &str) -> VsResult<()>;

	/// List all records, optionally restricted to names with `prefix`
	async fn list(&self, prefix: Option<&str>) -> VsResult<Vec<StoredSetting>>;
}

// vim: ts=4
