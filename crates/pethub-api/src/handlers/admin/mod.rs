//! Admin-only handlers.

pub mod monitored;
