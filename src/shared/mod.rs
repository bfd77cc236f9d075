//! Shared components - common errors

pub mod errors;
