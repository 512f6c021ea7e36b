//! Core puzzle state machine, independent of any presentation
//!
//! This module contains the playable heart of the game:
//! - Board state, legal moves, and the solved test
//! - Solvability parity checks backing the shuffler
//! - Session sequencing across a set of images

/// Board state and move validation
pub mod grid;
/// Solvability analysis for shuffled arrangements
pub mod parity;
/// Image sequencing across a play session
pub mod session;
/// Tile and grid-coordinate value types
pub mod tile;

pub use grid::{MoveResult, TileGrid};
pub use session::{Advance, PuzzleSession, TileSource};
pub use tile::{GridPos, Tile};
