//! Internal helpers shared across service clients.

pub mod log_sanitizer;
