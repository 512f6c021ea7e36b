//! Game constants and runtime configuration defaults

// Board geometry limits
/// Smallest playable board dimension
pub const MIN_GRID_SIZE: usize = 2;

// Keeps the board on screen and the resized image a manageable size
/// Largest allowed board dimension
pub const MAX_GRID_SIZE: usize = 16;

// Default values for configurable parameters
/// Default board dimension N for an N x N puzzle
pub const DEFAULT_GRID_SIZE: usize = 3;

/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

/// Default edge length of each sliced tile in pixels
pub const DEFAULT_TILE_PIXELS: u32 = 100;

// Safety limit to prevent excessive memory allocation during resize
/// Largest allowed tile edge in pixels
pub const MAX_TILE_PIXELS: u32 = 1024;

/// Default directory scanned for puzzle images
pub const DEFAULT_IMAGE_DIR: &str = "images";

// Image catalog settings
/// File extensions recognised as puzzle images (matched case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "png"];

// Terminal board geometry, in character cells
/// Width of one tile on screen
pub const TILE_CELL_WIDTH: u16 = 10;
/// Height of one tile on screen
pub const TILE_CELL_HEIGHT: u16 = 5;
/// Rows reserved above the board for the status line
pub const HEADER_ROWS: u16 = 2;

/// How long input polling waits before rechecking, in milliseconds
pub const INPUT_POLL_INTERVAL_MS: u64 = 120;

// Progress bar display settings
/// Width of the preflight progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Player-facing banners
/// Shown under the board once the picture is reassembled
pub const SOLVED_BANNER: &str = "Solved! Press any key for the next picture.";
/// Shown when every picture has been played
pub const EXHAUSTED_BANNER: &str = "All pictures completed! Press any key to exit.";
/// Key reference shown alongside the board
pub const CONTROLS_HINT: &str = "click or arrows: slide   n: next picture   q: quit";
