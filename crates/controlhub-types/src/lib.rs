//! Shared types and adapter traits for the Controlhub compliance service.
//!
//! This crate contains the foundational types that are shared between the
//! server crate, the hierarchy engine, and the store adapter implementations.
//! Extracting these into a separate crate allows adapter crates to compile in
//! parallel with the server's feature modules.

pub mod error;
pub mod prelude;
pub mod store_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
