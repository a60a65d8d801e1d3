//! Foundation types for the startpage shell.
//!
//! Platform-agnostic types shared by all startpage crates: colors, input
//! events, configuration, and error types. This crate has no platform
//! dependencies.

pub mod color;
pub mod config;
pub mod error;
pub mod input;
