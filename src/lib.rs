//! Sliding picture puzzle with a terminal front end
//!
//! The game slices a source image into an N x N grid of tiles, scrambles
//! them into a solvable arrangement, and lets the player slide tiles into
//! the empty slot until the picture is whole again. Sessions step through
//! a directory of images, one puzzle per picture.

#![forbid(unsafe_code)]

/// Input/output operations, configuration, and error handling
pub mod io;
/// Core puzzle state machine: tiles, boards, shuffling, and sessions
pub mod puzzle;
/// Terminal presentation layer
pub mod tui;

pub use io::error::{PuzzleError, Result};
