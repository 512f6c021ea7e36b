//! Image sequencing across a play session
//!
//! A session walks a tile source in order, building one shuffled board per
//! loadable image and reporting the ones it had to skip.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::grid::{TileGrid, validate_size};

/// Provider of tile contents for successive puzzles
///
/// Implementations own the backing collection (image files on disk in the
/// shipped binary) and are asked for one puzzle's tiles at a time.
pub trait TileSource {
    /// Display content carried by each tile
    type Content;

    /// Number of puzzles this source can provide
    fn count(&self) -> usize;

    /// Load the tile contents for the puzzle at `index`, in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error when the backing data cannot be read or decoded.
    fn load(&mut self, index: usize) -> Result<Vec<Self::Content>>;
}

/// A puzzle passed over because its tiles could not be loaded
#[derive(Debug)]
pub struct SkipReport {
    /// Source index of the skipped puzzle
    pub index: usize,
    /// Why loading failed
    pub error: PuzzleError,
}

/// What [`PuzzleSession::advance`] moved on to
#[derive(Debug)]
pub enum Advance {
    /// A fresh shuffled board is ready to play
    NextPuzzle {
        /// Source index of the image now on the board
        index: usize,
        /// Puzzles passed over because loading failed
        skipped: Vec<SkipReport>,
    },
    /// The source has no puzzles left
    Exhausted {
        /// Puzzles passed over because loading failed
        skipped: Vec<SkipReport>,
    },
}

/// Sequences puzzles from a source, one shuffled board at a time
///
/// The session owns the shuffle RNG, so a fixed seed reproduces the same
/// arrangements across the whole run.
pub struct PuzzleSession<S: TileSource> {
    source: S,
    grid_size: usize,
    next_index: usize,
    grid: Option<TileGrid<S::Content>>,
    rng: StdRng,
}

impl<S: TileSource> PuzzleSession<S> {
    /// Create a session over `source` with a seeded shuffle sequence
    ///
    /// No board exists until the first [`advance`](Self::advance) call.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `grid_size` is out of range.
    pub fn new(source: S, grid_size: usize, seed: u64) -> Result<Self> {
        validate_size(grid_size)?;

        Ok(Self {
            source,
            grid_size,
            next_index: 0,
            grid: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Move on to the next loadable puzzle, shuffling it onto the board
    ///
    /// Images that fail to load are skipped and reported rather than
    /// aborting the session. Once `Exhausted` is returned the board is gone
    /// and every further call returns `Exhausted` again.
    pub fn advance(&mut self) -> Advance {
        let mut skipped = Vec::new();

        loop {
            let index = self.next_index;
            if index >= self.source.count() {
                self.grid = None;
                return Advance::Exhausted { skipped };
            }
            self.next_index += 1;

            match self.load_grid(index) {
                Ok(mut grid) => {
                    grid.shuffle(&mut self.rng);
                    self.grid = Some(grid);
                    return Advance::NextPuzzle { index, skipped };
                }
                Err(error) => skipped.push(SkipReport { index, error }),
            }
        }
    }

    fn load_grid(&mut self, index: usize) -> Result<TileGrid<S::Content>> {
        let contents = self.source.load(index)?;
        TileGrid::from_contents(contents, self.grid_size)
    }

    /// Board currently in play, if any
    pub const fn grid(&self) -> Option<&TileGrid<S::Content>> {
        self.grid.as_ref()
    }

    /// Mutable board currently in play, if any
    pub const fn grid_mut(&mut self) -> Option<&mut TileGrid<S::Content>> {
        self.grid.as_mut()
    }

    /// Index of the next puzzle [`advance`](Self::advance) will try
    pub const fn cursor(&self) -> usize {
        self.next_index
    }

    /// Total number of puzzles the source offers
    pub fn total(&self) -> usize {
        self.source.count()
    }
}
