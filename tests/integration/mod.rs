//! Integration test suite for cursorflow
//!
//! End-to-end tests that run the `cursorflow` binary against template stores
//! laid out in temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **config**: global config file handling
//! - **errors**: exit codes and error messages
//! - **generate**: single and batch generation
//! - **wizard**: the interactive wizard driven through stdin

mod common;

mod config;
mod errors;
mod generate;
mod wizard;
