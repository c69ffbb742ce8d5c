//! Core subsystem: application state and bootstrap.

pub mod app;

// vim: ts=4
