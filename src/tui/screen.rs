//! Board rendering and terminal lifecycle management
//!
//! Tiles are painted as solid blocks of their image's average color with
//! the tile number centered on top, so progress stays readable even where
//! the terminal cannot show the pictures themselves.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use image::RgbaImage;

use crate::io::configuration::{CONTROLS_HINT, HEADER_ROWS, TILE_CELL_HEIGHT, TILE_CELL_WIDTH};
use crate::io::error::{Result, terminal_error};
use crate::puzzle::grid::TileGrid;
use crate::puzzle::tile::GridPos;

/// Puts the terminal into game mode and restores it on drop
///
/// Restoration runs in `Drop` so a panic or early return cannot leave the
/// player's shell in raw mode with the cursor hidden.
#[derive(Debug)]
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enter raw mode, the alternate screen, and mouse capture
    ///
    /// # Errors
    ///
    /// Returns `Terminal` if the terminal refuses any mode change.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| terminal_error("enable raw mode", e))?;

        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(terminal_error("enter alternate screen", e));
        }

        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Where the board sits on screen and how big each tile cell is
///
/// Screen coordinates are character cells, (column, row) from the top
/// left, as crossterm reports them.
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    /// Leftmost column of the board
    pub origin_col: u16,
    /// Topmost row of the board
    pub origin_row: u16,
    /// Character width of one tile cell
    pub cell_width: u16,
    /// Character height of one tile cell
    pub cell_height: u16,
    /// Board dimension N
    pub grid_size: usize,
}

impl BoardLayout {
    /// Center the board in a terminal of the given character dimensions
    ///
    /// Cramped terminals pin the board just below the status rows instead
    /// of clipping it symmetrically.
    pub const fn centered(term_cols: u16, term_rows: u16, grid_size: usize) -> Self {
        let cell_width = TILE_CELL_WIDTH;
        let cell_height = TILE_CELL_HEIGHT;
        let board_width = cell_width * grid_size as u16;
        let board_height = cell_height * grid_size as u16;

        let origin_col = term_cols.saturating_sub(board_width) / 2;
        let usable_rows = term_rows.saturating_sub(HEADER_ROWS);
        let origin_row = HEADER_ROWS + usable_rows.saturating_sub(board_height) / 2;

        Self {
            origin_col,
            origin_row,
            cell_width,
            cell_height,
            grid_size,
        }
    }

    /// Total board width in character cells
    pub const fn board_width(&self) -> u16 {
        self.cell_width * self.grid_size as u16
    }

    /// Total board height in character cells
    pub const fn board_height(&self) -> u16 {
        self.cell_height * self.grid_size as u16
    }

    /// Map a screen coordinate to the board cell under it
    pub fn cell_at(&self, column: u16, row: u16) -> Option<GridPos> {
        let dx = column.checked_sub(self.origin_col)?;
        let dy = row.checked_sub(self.origin_row)?;

        let board_col = (dx / self.cell_width) as usize;
        let board_row = (dy / self.cell_height) as usize;

        if board_row < self.grid_size && board_col < self.grid_size {
            Some(GridPos::new(board_row, board_col))
        } else {
            None
        }
    }
}

/// Average color of an image, used to paint its tile block
pub fn average_color(image: &RgbaImage) -> Color {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return Color::Black;
    }

    let mut red = 0u64;
    let mut green = 0u64;
    let mut blue = 0u64;
    for pixel in image.pixels() {
        let [r, g, b, _] = pixel.0;
        red += u64::from(r);
        green += u64::from(g);
        blue += u64::from(b);
    }

    Color::Rgb {
        r: (red / pixel_count) as u8,
        g: (green / pixel_count) as u8,
        b: (blue / pixel_count) as u8,
    }
}

// Pick a label color that stays readable on the tile's average color
const fn label_contrast(background: Color) -> Color {
    if let Color::Rgb { r, g, b } = background {
        // Integer luma approximation, ITU-R BT.601 weights scaled by 1000
        let luma = 299 * (r as u32) + 587 * (g as u32) + 114 * (b as u32);
        if luma >= 128_000 {
            return Color::Black;
        }
    }

    Color::White
}

/// Paint the whole game frame: status rows, board, and optional banner
///
/// Everything is queued into `out` and flushed once at the end to avoid
/// visible tearing on slow terminals.
///
/// # Errors
///
/// Returns `Terminal` if writing to the terminal fails.
pub fn draw_board(
    out: &mut impl Write,
    grid: &TileGrid<RgbaImage>,
    layout: &BoardLayout,
    status: &str,
    banner: Option<&str>,
) -> Result<()> {
    queue!(
        out,
        ResetColor,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(status),
        MoveTo(0, 1),
        Print(CONTROLS_HINT)
    )
    .map_err(|e| terminal_error("draw status", e))?;

    for (position, tile) in grid.tiles() {
        if let Some(content) = tile.content() {
            draw_tile(out, layout, position, tile.origin(), content)?;
        }
    }

    if let Some(text) = banner {
        let banner_row = layout.origin_row + layout.board_height() + 1;
        queue!(out, MoveTo(layout.origin_col, banner_row), Print(text))
            .map_err(|e| terminal_error("draw banner", e))?;
    }

    out.flush().map_err(|e| terminal_error("flush frame", e))
}

// One tile: a solid block of the image's average color with its number
fn draw_tile(
    out: &mut impl Write,
    layout: &BoardLayout,
    position: GridPos,
    origin: GridPos,
    content: &RgbaImage,
) -> Result<()> {
    let left = layout.origin_col + position.col as u16 * layout.cell_width;
    let top = layout.origin_row + position.row as u16 * layout.cell_height;

    let background = average_color(content);
    let foreground = label_contrast(background);
    let label = (origin.index(layout.grid_size) + 1).to_string();

    // One-cell gutter keeps neighbouring tiles distinguishable
    let inner_width = layout.cell_width.saturating_sub(1) as usize;
    let inner_height = layout.cell_height.saturating_sub(1);

    let blank = " ".repeat(inner_width);
    let label_row = inner_height / 2;

    for dy in 0..inner_height {
        let line = if dy == label_row {
            let padding = inner_width.saturating_sub(label.len());
            let pad_left = padding / 2;
            format!(
                "{}{}{}",
                " ".repeat(pad_left),
                label,
                " ".repeat(padding - pad_left)
            )
        } else {
            blank.clone()
        };

        queue!(
            out,
            MoveTo(left, top + dy),
            SetBackgroundColor(background),
            SetForegroundColor(foreground),
            Print(line),
            ResetColor
        )
        .map_err(|e| terminal_error("draw tile", e))?;
    }

    Ok(())
}

/// Paint the end-of-session screen with a centered message
///
/// # Errors
///
/// Returns `Terminal` if writing to the terminal fails.
pub fn draw_closing(
    out: &mut impl Write,
    term_cols: u16,
    term_rows: u16,
    message: &str,
) -> Result<()> {
    let col = term_cols.saturating_sub(message.len() as u16) / 2;
    let row = term_rows / 2;

    queue!(
        out,
        ResetColor,
        Clear(ClearType::All),
        MoveTo(col, row),
        Print(message)
    )
    .map_err(|e| terminal_error("draw closing screen", e))?;

    out.flush().map_err(|e| terminal_error("flush frame", e))
}

/// Current terminal dimensions in character cells
///
/// # Errors
///
/// Returns `Terminal` if the size cannot be queried.
pub fn terminal_size() -> Result<(u16, u16)> {
    crossterm::terminal::size().map_err(|e| terminal_error("query terminal size", e))
}
