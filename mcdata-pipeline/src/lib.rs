//! Processing phases for the mcdata processor.
//!
//! This crate turns a tree of generated data into the processed output tree.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phase trait, processing context and the [`Pipeline`] runner
//! - [`phases`] - Built-in phases (originals, registries, blocks, reports, data)

pub mod phases;
pub mod pipeline;

pub use pipeline::{Pipeline, ProcessContext};
