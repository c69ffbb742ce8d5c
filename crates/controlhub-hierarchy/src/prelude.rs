pub use controlhub_types::prelude::*;

// vim: ts=4
