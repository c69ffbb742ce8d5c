//! Controlhub is a service for managing compliance controls.
//!
//! Controls are grouped into named control sets, and control sets are
//! organized into a parent/child tree ranked by hierarchy depth. The HTTP
//! layer here is thin plumbing: requests are parsed, handed to the hierarchy
//! engine (`controlhub-hierarchy`), and the validated mutations land in the
//! store adapter.

#![forbid(unsafe_code)]

pub mod control;
pub mod control_set;
pub mod core;
pub mod hierarchy;
pub mod prelude;
pub mod reference;
pub mod routes;

pub use crate::core::app::{App, AppBuilder, AppState};

use crate::prelude::*;

/// Serve the API on the configured listen address until the task is aborted.
pub async fn run(app: App) -> ChResult<()> {
	let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
	info!("Listening on {}", app.opts.listen);
	axum::serve(listener, routes::init(app)).await?;
	Ok(())
}

// vim: ts=4
