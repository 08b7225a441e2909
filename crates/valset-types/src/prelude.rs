//! Commonly used imports for valset crates

pub use crate::error::{Error, VsResult};
pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
