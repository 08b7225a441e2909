//! Generic typed settings store.
//!
//! Named configuration values whose underlying type (string, integer,
//! positive integer, time-delta, or a host-registered extension) is
//! determined per entry and validated on write. Persistence lives behind the
//! [`SettingAdapter`] trait; every successful write is published on an
//! in-process [`ChangeBus`] so [`CachedSetting`] readers stay fresh without
//! polling the store.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod manager;
pub mod notify;
pub mod prelude;
pub mod registry;
pub mod value_type;

pub use cache::CachedSetting;
pub use manager::SettingManager;
pub use notify::{ChangeBus, ChangeEvent, SubscriptionId};
pub use registry::{FrozenTypeRegistry, TypeRegistry};
pub use value_type::ValueType;

pub use valset_types::{Error, SettingAdapter, SettingValue, StoredSetting, TimeDelta, VsResult};

// vim: ts=4
