//! Control subsystem: create/read/update/delete endpoints for controls.

pub mod handler;

// vim: ts=4
