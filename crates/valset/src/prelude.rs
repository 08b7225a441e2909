//! Commonly used imports for the valset feature crate

pub use valset_types::prelude::*;
pub use valset_types::{SettingValue, TimeDelta};

// vim: ts=4
