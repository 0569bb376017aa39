//! Application layer orchestrating the allocation engine.
//!
//! This module defines the `SplitService`, the entry point the surrounding
//! infrastructure (CLI, HTTP handler, bot) calls once a reviewed split
//! request exists. It owns the storage port and hands every computed outcome
//! to it before returning.

pub mod service;
