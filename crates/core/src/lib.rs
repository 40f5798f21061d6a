//! Core business logic for openballot.

pub mod services;

pub use services::*;
