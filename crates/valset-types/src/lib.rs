//! Shared types and adapter traits for the valset typed settings store.
//!
//! This crate contains the foundational types that are shared between the
//! feature crate and all store adapter implementations. Extracting these into
//! a separate crate allows adapter crates to compile in parallel with the
//! feature crate.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod setting_adapter;
pub mod value;

pub use error::{Error, VsResult};
pub use setting_adapter::{SettingAdapter, StoredSetting};
pub use value::{SettingValue, TimeDelta};

// vim: ts=4
