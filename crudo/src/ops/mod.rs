//! Core operations.
//!
//! This module contains the business logic for crudo commands,
//! separated from CLI argument parsing and output rendering.

pub mod clean;
pub mod generate;

pub use clean::clean;
pub use generate::generate;
