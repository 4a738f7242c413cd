//! # pethub-api
//!
//! HTTP API layer for PetHub built on Axum.
//!
//! Exposes the admin-only monitored-users listing and a health endpoint,
//! with the bearer-token extractor, role guard, CORS, request logging,
//! and error mapping they need.
//!
//! The pet and user CRUD handlers live outside this crate. They mount on
//! [`AppState`] and report each successful mutation through
//! [`AppState::recorder`], which appends to the same action log the
//! activity monitor reads.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
