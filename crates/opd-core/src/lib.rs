//! # opd-core
//!
//! Shared configuration for Operator Dashboard RS: the query service
//! endpoint, the local storage root, and presentation settings, loaded
//! from the environment with sensible defaults.

pub mod config;

pub use config::*;
