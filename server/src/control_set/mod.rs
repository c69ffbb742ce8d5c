//! Control set subsystem: create/read/update/delete endpoints for control
//! sets.

pub mod handler;

// vim: ts=4
