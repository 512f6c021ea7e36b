//! Keyboard and mouse handling for the game loop

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::io::error::{Result, terminal_error};
use crate::puzzle::tile::GridPos;
use crate::tui::screen::BoardLayout;

/// Keyboard slide direction, named for how a tile moves on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Slide the tile below the empty slot upward
    Up,
    /// Slide the tile above the empty slot downward
    Down,
    /// Slide the tile right of the empty slot leftward
    Left,
    /// Slide the tile left of the empty slot rightward
    Right,
}

impl SlideDirection {
    /// Board position of the tile this direction would slide into `empty`
    ///
    /// Returns `None` when that tile would sit off the board.
    pub const fn target_beside(self, empty: GridPos, size: usize) -> Option<GridPos> {
        match self {
            Self::Up => {
                if empty.row + 1 < size {
                    Some(GridPos::new(empty.row + 1, empty.col))
                } else {
                    None
                }
            }
            Self::Down => {
                if empty.row == 0 {
                    None
                } else {
                    Some(GridPos::new(empty.row - 1, empty.col))
                }
            }
            Self::Left => {
                if empty.col + 1 < size {
                    Some(GridPos::new(empty.row, empty.col + 1))
                } else {
                    None
                }
            }
            Self::Right => {
                if empty.col == 0 {
                    None
                } else {
                    Some(GridPos::new(empty.row, empty.col - 1))
                }
            }
        }
    }
}

/// One player action distilled from raw terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// A tile was clicked
    Select(GridPos),
    /// An arrow key asked for a slide
    Slide(SlideDirection),
    /// Skip ahead to the next picture
    NextImage,
    /// Leave the game
    Quit,
    /// The terminal was resized and the board needs repainting
    Redraw,
    /// Any other key press, which the press-any-key prompts accept
    Other,
}

/// Poll for one player command, waiting at most `timeout`
///
/// Returns `Ok(None)` when nothing actionable arrives in time. Key
/// releases and mouse movement are swallowed here so callers only ever
/// see deliberate input.
///
/// # Errors
///
/// Returns `Terminal` if polling or reading terminal events fails.
pub fn read_command(timeout: Duration, layout: &BoardLayout) -> Result<Option<PlayerCommand>> {
    if !event::poll(timeout).map_err(|e| terminal_error("poll input", e))? {
        return Ok(None);
    }

    match event::read().map_err(|e| terminal_error("read input", e))? {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Ok(Some(map_key(&key)))
        }
        Event::Mouse(mouse) => Ok(map_mouse(&mouse, layout)),
        Event::Resize(_, _) => Ok(Some(PlayerCommand::Redraw)),
        _ => Ok(None),
    }
}

/// Translate a key press into a player command
pub fn map_key(key: &KeyEvent) -> PlayerCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return PlayerCommand::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => PlayerCommand::Quit,
        KeyCode::Char('n' | 'N') => PlayerCommand::NextImage,
        KeyCode::Up => PlayerCommand::Slide(SlideDirection::Up),
        KeyCode::Down => PlayerCommand::Slide(SlideDirection::Down),
        KeyCode::Left => PlayerCommand::Slide(SlideDirection::Left),
        KeyCode::Right => PlayerCommand::Slide(SlideDirection::Right),
        _ => PlayerCommand::Other,
    }
}

/// Translate a mouse event into a tile selection
///
/// Only left-button presses inside the board select a tile; everything
/// else is ignored.
pub fn map_mouse(mouse: &MouseEvent, layout: &BoardLayout) -> Option<PlayerCommand> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    layout
        .cell_at(mouse.column, mouse.row)
        .map(PlayerCommand::Select)
}
