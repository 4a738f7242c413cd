//! Integration tests for the PetHub server, run against in-memory stores.

mod helpers;
mod monitor_test;
mod monitored_users_test;
