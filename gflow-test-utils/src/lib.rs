//! Test utilities shared across the gflow workspace
//!
//! This crate provides common testing infrastructure including:
//! - A scripted process runner ([`FakeRunner`]) for driving the flow driver
//!   without spawning real processes
//! - Temporary working directory management ([`TempWorkdir`])
//!
//! The clippy dead_code lint is disabled for this crate because test
//! utilities may not be used by all tests, and the compiler cannot detect
//! usage across crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod fake_runner;
pub mod workdir;

// Re-export commonly used items
pub use fake_runner::{FakeRunner, RecordedCall};
pub use workdir::TempWorkdir;
