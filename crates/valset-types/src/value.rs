//! Typed setting values
//!
//! `SettingValue` is the tagged union of every value representation the store
//! can hold. `TimeDelta` is a structured relative duration with a canonical
//! `field=value,field=value` text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The in-memory representation of one stored setting value.
///
/// The variant tag doubles as the value type tag persisted alongside the
/// setting name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SettingValue {
	String(Box<str>),
	Integer(i64),
	PositiveInteger(u64),
	TimeDelta(TimeDelta),
}

impl SettingValue {
	/// Canonical display name of the variant's value type
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::String(_) => "String",
			SettingValue::Integer(_) => "Integer",
			SettingValue::PositiveInteger(_) => "PositiveInteger",
			SettingValue::TimeDelta(_) => "TimeDelta",
		}
	}
}

impl fmt::Display for SettingValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SettingValue::String(s) => write!(f, "{}", s),
			SettingValue::Integer(n) => write!(f, "{}", n),
			SettingValue::PositiveInteger(n) => write!(f, "{}", n),
			SettingValue::TimeDelta(td) => write!(f, "{}", td),
		}
	}
}

impl From<&str> for SettingValue {
	fn from(s: &str) -> Self {
		SettingValue::String(s.into())
	}
}

impl From<i64> for SettingValue {
	fn from(n: i64) -> Self {
		SettingValue::Integer(n)
	}
}

impl From<TimeDelta> for SettingValue {
	fn from(td: TimeDelta) -> Self {
		SettingValue::TimeDelta(td)
	}
}

/// Accepted field names, in canonical serialization order
const TIME_DELTA_FIELDS: [&str; 9] = [
	"years",
	"months",
	"weeks",
	"leapdays",
	"days",
	"hours",
	"minutes",
	"seconds",
	"microseconds",
];

/// A structured relative duration, e.g. "three months and two days".
///
/// Useful for expressing expiration times and similar calendar-relative
/// offsets. The text form is a comma-separated `field=value` list containing
/// only the non-zero fields, e.g. `months=3,days=2`. Only the field names in
/// [`TIME_DELTA_FIELDS`] are accepted; anything else fails validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeDelta {
	pub years: i64,
	pub months: i64,
	pub weeks: i64,
	pub leapdays: i64,
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
	pub microseconds: i64,
}

impl TimeDelta {
	/// True if every field is zero. The canonical text form of a zero delta
	/// is the empty string.
	pub fn is_zero(&self) -> bool {
		*self == TimeDelta::default()
	}

	fn field(&self, name: &str) -> i64 {
		match name {
			"years" => self.years,
			"months" => self.months,
			"weeks" => self.weeks,
			"leapdays" => self.leapdays,
			"days" => self.days,
			"hours" => self.hours,
			"minutes" => self.minutes,
			"seconds" => self.seconds,
			"microseconds" => self.microseconds,
			_ => 0,
		}
	}

	fn field_mut(&mut self, name: &str) -> Option<&mut i64> {
		match name {
			"years" => Some(&mut self.years),
			"months" => Some(&mut self.months),
			"weeks" => Some(&mut self.weeks),
			"leapdays" => Some(&mut self.leapdays),
			"days" => Some(&mut self.days),
			"hours" => Some(&mut self.hours),
			"minutes" => Some(&mut self.minutes),
			"seconds" => Some(&mut self.seconds),
			"microseconds" => Some(&mut self.microseconds),
			_ => None,
		}
	}
}

impl fmt::Display for TimeDelta {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for name in TIME_DELTA_FIELDS {
			let value = self.field(name);
			if value != 0 {
				if !first {
					write!(f, ",")?;
				}
				write!(f, "{}={}", name, value)?;
				first = false;
			}
		}
		Ok(())
	}
}

impl FromStr for TimeDelta {
	type Err = Error;

	fn from_str(s: &str) -> VsResult<Self> {
		let mut delta = TimeDelta::default();
		if s.trim().is_empty() {
			return Ok(delta);
		}

		for part in s.split(',') {
			let part = part.trim();
			let Some((name, value)) = part.split_once('=') else {
				return Err(Error::ValidationError(format!(
					"time delta entry '{}' is not of the form field=value",
					part
				)));
			};
			let name = name.trim();
			let Some(slot) = delta.field_mut(name) else {
				return Err(Error::ValidationError(format!(
					"unknown time delta field '{}'",
					name
				)));
			};
			// Duplicate fields: last one wins
			*slot = value.trim().parse::<i64>().map_err(|_| {
				Error::ValidationError(format!("time delta field '{}' is not an integer", name))
			})?;
		}
		Ok(delta)
	}
}


// vim: ts=4
