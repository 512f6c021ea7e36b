//! Terminal presentation layer built on crossterm
//!
//! Owns everything screen-shaped: raw-mode lifecycle, board layout and
//! painting, and the translation of raw terminal events into player
//! commands. The puzzle engine underneath never touches the terminal.

/// Keyboard and mouse handling
pub mod input;
/// Board rendering and terminal lifecycle
pub mod screen;

pub use input::{PlayerCommand, SlideDirection};
pub use screen::{BoardLayout, TerminalGuard};
