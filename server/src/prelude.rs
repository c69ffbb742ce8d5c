pub use crate::core::app::App;
pub use controlhub_types::error::{ChResult, Error};
pub use controlhub_types::types::{Control, ControlHierarchy, ControlSet, ControlSetReference};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
