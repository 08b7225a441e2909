//! Setting value types
//!
//! A [`ValueType`] defines how one kind of setting value is represented,
//! validated, and converted to and from its canonical text form. The four
//! built-in types cover the [`SettingValue`] variants; hosts may implement
//! the trait for their own representations and register them before freezing
//! the registry.

use std::fmt::Debug;

use crate::prelude::*;

/// Validation and serialization rules for one kind of setting value.
///
/// Invariants:
/// - `parse(serialize(v))` returns `v` for every value `v` the type accepts.
/// - Both directions fail with [`Error::ValidationError`] on bad input,
///   never a generic error.
pub trait ValueType: Send + Sync + Debug {
	/// Display name used as the registry key and as the stored type tag
	fn name(&self) -> &str;

	/// Parse the canonical text form into a typed value
	fn parse(&self, raw: &str) -> VsResult<SettingValue>;

	/// Serialize a typed value into its canonical text form.
	///
	/// This doubles as the write-time validation predicate: a value of the
	/// wrong variant is a validation error.
	fn serialize(&self, value: &SettingValue) -> VsResult<Box<str>>;
}

fn wrong_variant(expected: &str, value: &SettingValue) -> Error {
	Error::ValidationError(format!(
		"expected a {} value, got {}",
		expected,
		value.type_name()
	))
}

/// Free-form string values
#[derive(Debug, Default)]
pub struct StringType;

impl ValueType for StringType {
	fn name(&self) -> &str {
		"String"
	}

	fn parse(&self, raw: &str) -> VsResult<SettingValue> {
		Ok(SettingValue::String(raw.into()))
	}

	fn serialize(&self, value: &SettingValue) -> VsResult<Box<str>> {
		match value {
			SettingValue::String(s) => Ok(s.clone()),
			other => Err(wrong_variant(self.name(), other)),
		}
	}
}

/// Signed 64-bit integer values
#[derive(Debug, Default)]
pub struct IntegerType;

impl ValueType for IntegerType {
	fn name(&self) -> &str {
		"Integer"
	}

	fn parse(&self, raw: &str) -> VsResult<SettingValue> {
		let n = raw.trim().parse::<i64>().map_err(|_| {
			Error::ValidationError(format!("'{}' is not an integer", raw))
		})?;
		Ok(SettingValue::Integer(n))
	}

	fn serialize(&self, value: &SettingValue) -> VsResult<Box<str>> {
		match value {
			SettingValue::Integer(n) => Ok(n.to_string().into()),
			other => Err(wrong_variant(self.name(), other)),
		}
	}
}

/// Unsigned 64-bit integer values
#[derive(Debug, Default)]
pub struct PositiveIntegerType;

impl ValueType for PositiveIntegerType {
	fn name(&self) -> &str {
		"PositiveInteger"
	}

	fn parse(&self, raw: &str) -> VsResult<SettingValue> {
		let n = raw.trim().parse::<u64>().map_err(|_| {
			Error::ValidationError(format!("'{}' is not a non-negative integer", raw))
		})?;
		Ok(SettingValue::PositiveInteger(n))
	}

	fn serialize(&self, value: &SettingValue) -> VsResult<Box<str>> {
		match value {
			SettingValue::PositiveInteger(n) => Ok(n.to_string().into()),
			other => Err(wrong_variant(self.name(), other)),
		}
	}
}

/// Structured relative duration values, e.g. `months=3,days=2`
#[derive(Debug, Default)]
pub struct TimeDeltaType;

impl ValueType for TimeDeltaType {
	fn name(&self) -> &str {
		"TimeDelta"
	}

	fn parse(&self, raw: &str) -> VsResult<SettingValue> {
		Ok(SettingValue::TimeDelta(raw.parse::<TimeDelta>()?))
	}

	fn serialize(&self, value: &SettingValue) -> VsResult<Box<str>> {
		match value {
			SettingValue::TimeDelta(td) => Ok(td.to_string().into()),
			other => Err(wrong_variant(self.name(), other)),
		}
	}
}


// vim: ts=4
