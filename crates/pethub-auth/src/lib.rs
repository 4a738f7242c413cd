//! # pethub-auth
//!
//! Access-token handling for the PetHub admin surface.
//!
//! Tokens are issued by the login flow of the CRUD layer and carry the
//! user id and role. This crate signs and verifies them.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
