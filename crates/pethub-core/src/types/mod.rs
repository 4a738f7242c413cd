//! Shared value types used across PetHub crates.

pub mod id;

pub use id::UserId;
