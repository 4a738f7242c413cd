//! # pethub-entity
//!
//! Domain entity models for PetHub. Every struct in this crate represents
//! a database table row or a domain value object. Row types additionally
//! derive `sqlx::FromRow`.

pub mod action_log;
pub mod monitored;
pub mod user;
