pub use crate::error::{ChResult, Error};
pub use crate::store_adapter::ControlStore;
pub use crate::types::{Control, ControlHierarchy, ControlSet, ControlSetReference};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
