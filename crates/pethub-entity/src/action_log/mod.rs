//! Append-only action log entities.

pub mod label;
pub mod model;

pub use label::ActionLabel;
pub use model::{ActionLogEntry, NewActionLogEntry};
