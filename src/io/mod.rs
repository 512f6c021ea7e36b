//! Input/output operations, configuration, and error handling
//!
//! This module contains everything that touches the world outside the
//! puzzle engine:
//! - Image catalog scanning and tile slicing
//! - CLI parsing and the interactive game driver
//! - Error types shared across the crate

/// Image directory scanning
pub mod catalog;
/// Command-line interface and game driver
pub mod cli;
/// Game constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image loading, resizing, and tile slicing
pub mod image;

pub use error::{PuzzleError, Result};
