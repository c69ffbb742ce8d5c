//! Control set reference subsystem: read and reference-id update endpoints.

pub mod handler;

// vim: ts=4
