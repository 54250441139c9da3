//! Core operations.
//!
//! This module contains the business logic for mcdata commands,
//! separated from CLI argument parsing and output rendering.

pub mod process;

pub use process::process;
