//! Response bodies that are not domain entities.

pub mod response;
