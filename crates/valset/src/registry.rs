//! Value type registry
//!
//! Hosts register value type providers under their display names during
//! startup, then freeze the registry before handing it to the manager.
//! Registration replaces dynamic subclass discovery: adding a value type is
//! an explicit call, not a module scan.

use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;
use crate::value_type::{
	IntegerType, PositiveIntegerType, StringType, TimeDeltaType, ValueType,
};

/// Mutable registry used during startup
#[derive(Debug, Default)]
pub struct TypeRegistry {
	types: HashMap<Box<str>, Arc<dyn ValueType>>,
}

impl TypeRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry pre-populated with the built-in value types
	/// (String, Integer, PositiveInteger, TimeDelta)
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		// Built-in registration cannot collide in an empty registry
		let _ = registry.register(Arc::new(StringType));
		let _ = registry.register(Arc::new(IntegerType));
		let _ = registry.register(Arc::new(PositiveIntegerType));
		let _ = registry.register(Arc::new(TimeDeltaType));
		registry
	}

	/// Register a value type under its display name.
	///
	/// Fails with a validation error if the name is already taken.
	pub fn register(&mut self, value_type: Arc<dyn ValueType>) -> VsResult<()> {
		let name: Box<str> = value_type.name().into();
		if self.types.contains_key(&name) {
			return Err(Error::ValidationError(format!(
				"value type '{}' is already registered",
				name
			)));
		}
		debug!("Registered value type {}", name);
		self.types.insert(name, value_type);
		Ok(())
	}

	/// Freeze the registry for shared read-only use
	pub fn freeze(self) -> FrozenTypeRegistry {
		FrozenTypeRegistry { types: self.types }
	}
}

/// Immutable registry handed to the manager after startup
#[derive(Debug)]
pub struct FrozenTypeRegistry {
	types: HashMap<Box<str>, Arc<dyn ValueType>>,
}

impl FrozenTypeRegistry {
	/// Resolve a value type by display name
	pub fn resolve(&self, name: &str) -> VsResult<Arc<dyn ValueType>> {
		self.types
			.get(name)
			.cloned()
			.ok_or_else(|| Error::UnknownType(name.into()))
	}

	/// True if a value type is registered under `name`
	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Display names of all registered value types
	pub fn list(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.types.keys().map(AsRef::as_ref).collect();
		names.sort_unstable();
		names
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtins_resolve() {
		let registry = TypeRegistry::with_builtins().freeze();
		for name in ["String", "Integer", "PositiveInteger", "TimeDelta"] {
			assert!(registry.contains(name), "missing builtin {}", name);
			assert_eq!(registry.resolve(name).unwrap().name(), name);
		}
		assert_eq!(registry.list(), vec!["Integer", "PositiveInteger", "String", "TimeDelta"]);
	}

	#[test]
	fn test_resolve_unknown() {
		let registry = TypeRegistry::with_builtins().freeze();
		let err = registry.resolve("Float").unwrap_err();
		assert!(matches!(err, Error::UnknownType(name) if &*name == "Float"));
	}

	#[test]
	fn test_duplicate_registration_fails() {
		let mut registry = TypeRegistry::with_builtins();
		let err = registry.register(Arc::new(crate::value_type::StringType)).unwrap_err();
		assert!(matches!(err, Error::ValidationError(_)));
	}

	#[derive(Debug)]
	struct UpperType;

	impl ValueType for UpperType {
		fn name(&self) -> &str {
			"Upper"
		}

		fn parse(&self, raw: &str) -> VsResult<SettingValue> {
			Ok(SettingValue::String(raw.to_uppercase().into()))
		}

		fn serialize(&self, value: &SettingValue) -> VsResult<Box<str>> {
			match value {
				SettingValue::String(s) => Ok(s.clone()),
				_ => Err(Error::ValidationError("expected a string".into())),
			}
		}
	}

	#[test]
	fn test_host_registered_type() {
		let mut registry = TypeRegistry::with_builtins();
		registry.register(Arc::new(UpperType)).unwrap();
		let frozen = registry.freeze();
		let vt = frozen.resolve("Upper").unwrap();
		assert_eq!(vt.parse("abc").unwrap(), SettingValue::String("ABC".into()));
	}
}

// vim: ts=4
