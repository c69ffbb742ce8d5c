//! Hierarchy consistency engine for the Controlhub compliance service.
//!
//! Controls, control sets, and their dependent records (references and
//! hierarchies) are kept mutually consistent by four cooperating modules:
//!
//! - [`linker`] pairs every control with exactly one control set reference
//!   and keeps the pairing intact across renames.
//! - [`validator`] enforces the depth-ordering rules between a control set
//!   and its declared parents and children before a mutation commits.
//! - [`mutator`] applies validated hierarchy changes, propagating membership
//!   into immediate parents and reference-id renames through embedded
//!   membership copies.
//! - [`cascade`] removes dependent records when a control or control set is
//!   deleted.
//!
//! The engine drives a [`controlhub_types::store_adapter::ControlStore`] and
//! performs no I/O of its own. Apart from the reference-id rename (atomic
//! inside the store), multi-step mutations are sequences of store calls and a
//! mid-sequence failure leaves earlier writes in place.

pub mod cascade;
pub mod linker;
pub mod mutator;
mod prelude;
pub mod validator;

// vim: ts=4
