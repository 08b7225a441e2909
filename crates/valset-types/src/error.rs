//! Error types shared across the valset crates.
//!
//! All failures surface as one of these variants so callers can branch on
//! kind. None of them are retried internally.

use std::fmt;

/// Result alias used throughout the valset crates
pub type VsResult<T> = Result<T, Error>;

/// Typed failure taxonomy of the settings store
#[derive(Debug)]
pub enum Error {
	/// Malformed or out-of-domain value (bad serialized form, wrong variant)
	ValidationError(String),
	/// Read of an absent setting name without a default
	NotFound,
	/// Value type name does not match any registered provider
	UnknownType(Box<str>),
	/// One-live-record-per-name invariant violated; aborts the operation
	Consistency(String),
	/// Backend failure; details are logged at the adapter boundary
	DbError,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::NotFound => write!(f, "setting not found"),
			Error::UnknownType(name) => write!(f, "unknown value type: {}", name),
			Error::Consistency(msg) => write!(f, "consistency error: {}", msg),
			Error::DbError => write!(f, "database error"),
		}
	}
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Error::NotFound.to_string(), "setting not found");
		assert_eq!(Error::UnknownType("Float".into()).to_string(), "unknown value type: Float");
		assert_eq!(
			Error::ValidationError("not an integer".into()).to_string(),
			"validation error: not an integer"
		);
	}
}

// vim: ts=4
