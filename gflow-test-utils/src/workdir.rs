//! Temporary working directory management for testing
//!
//! This module provides a guard for creating temporary directories to stand
//! in for repositories and optionally changing the current working directory
//! for the duration of a test.

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A test guard that creates a temporary directory and optionally changes
/// the current working directory to it. The original working directory is
/// restored when the guard is dropped.
pub struct TempWorkdir {
  /// The temporary directory
  pub temp_dir: TempDir,
  /// The original working directory, if changed
  original_dir: Option<PathBuf>,
}

impl TempWorkdir {
  /// Create a new temporary directory without changing the current working
  /// directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    Self {
      temp_dir,
      original_dir: None,
    }
  }

  /// Create a new temporary directory and change the current working
  /// directory to it
  pub fn new_and_change_dir() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let original_dir = env::current_dir().expect("Failed to get current directory");

    env::set_current_dir(temp_dir.path()).expect("Failed to change directory");

    Self {
      temp_dir,
      original_dir: Some(original_dir),
    }
  }

  /// Path of the temporary directory
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Default for TempWorkdir {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for TempWorkdir {
  fn drop(&mut self) {
    if let Some(original_dir) = self.original_dir.take() {
      let _ = env::set_current_dir(original_dir);
    }
  }
}
