//! Hierarchy subsystem: membership/parents/children updates, enriched
//! listings, and member removal.

pub mod handler;

// vim: ts=4
