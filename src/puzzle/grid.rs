//! Board state and move validation for the sliding puzzle
//!
//! The board is a square array of tiles with exactly one empty slot. Moves
//! swap an edge-adjacent tile into the empty slot; the solved test compares
//! every tile's origin against the cell it currently occupies.

use bitvec::prelude::*;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::configuration::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::puzzle::parity;
use crate::puzzle::tile::{GridPos, Tile};

/// Outcome of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The target tile slid into the empty slot
    Accepted,
    /// The target was out of bounds or not beside the empty slot
    Rejected,
}

/// Square sliding-puzzle board holding one tile per cell
///
/// Cells are stored row-major. The empty slot's location is cached so that
/// move validation never rescans the board.
#[derive(Debug, Clone)]
pub struct TileGrid<C> {
    size: usize,
    cells: Array2<Tile<C>>,
    empty_position: GridPos,
}

impl<C> TileGrid<C> {
    /// Build a solved board from row-major tile contents
    ///
    /// Requires exactly `size * size` entries. The final entry's content is
    /// discarded and its cell becomes the empty slot, so the board starts
    /// in the solved arrangement.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is out of range or the content
    /// count does not fill the board.
    pub fn from_contents(contents: Vec<C>, size: usize) -> Result<Self> {
        let cell_count = validate_size(size)?;
        if contents.len() != cell_count {
            return Err(invalid_parameter(
                "contents",
                &contents.len(),
                &format!("a {size}x{size} board needs exactly {cell_count} tiles"),
            ));
        }

        let last_index = cell_count - 1;
        let tiles = contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                let origin = GridPos::from_index(index, size);
                if index == last_index {
                    Tile::empty(origin)
                } else {
                    Tile::new(origin, content)
                }
            })
            .collect();

        Self::from_cells(tiles, size, GridPos::new(size - 1, size - 1))
    }

    /// Rebuild a board from tiles already tagged with origins
    ///
    /// Accepts tiles in row-major board order. Origins must form a complete
    /// permutation of the board's cells and exactly one tile must be the
    /// empty slot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is out of range, the tile count
    /// is wrong, an origin repeats or falls outside the board, or the
    /// arrangement does not hold exactly one empty slot.
    pub fn from_tiles(tiles: Vec<Tile<C>>, size: usize) -> Result<Self> {
        let cell_count = validate_size(size)?;
        if tiles.len() != cell_count {
            return Err(invalid_parameter(
                "tiles",
                &tiles.len(),
                &format!("a {size}x{size} board needs exactly {cell_count} tiles"),
            ));
        }

        let mut seen = bitvec![0; cell_count];
        let mut empty_position = None;

        for (index, tile) in tiles.iter().enumerate() {
            let origin_index = tile.origin().index(size);
            let already_seen = seen.get(origin_index).as_deref().copied();
            match already_seen {
                Some(true) => {
                    return Err(invalid_parameter(
                        "tiles",
                        &origin_index,
                        &"duplicate tile origin",
                    ));
                }
                Some(false) => seen.set(origin_index, true),
                None => {
                    return Err(invalid_parameter(
                        "tiles",
                        &origin_index,
                        &"tile origin outside the board",
                    ));
                }
            }

            if tile.is_empty() {
                if empty_position.is_some() {
                    return Err(invalid_parameter("tiles", &index, &"second empty slot"));
                }
                empty_position = Some(GridPos::from_index(index, size));
            }
        }

        let Some(empty_position) = empty_position else {
            return Err(invalid_parameter("tiles", &cell_count, &"no empty slot"));
        };

        Self::from_cells(tiles, size, empty_position)
    }

    fn from_cells(tiles: Vec<Tile<C>>, size: usize, empty_position: GridPos) -> Result<Self> {
        let cells = Array2::from_shape_vec((size, size), tiles)
            .map_err(|e| invalid_parameter("tiles", &size, &e))?;

        Ok(Self {
            size,
            cells,
            empty_position,
        })
    }

    /// Scramble the board into a uniformly random solvable arrangement
    ///
    /// Permutes all cells including the empty slot, redrawing whenever the
    /// permutation lands on an unsolvable or already solved board, so the
    /// result is always winnable and never a no-op.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        loop {
            if let Some(cells) = self.cells.as_slice_mut() {
                cells.shuffle(rng);
            }
            self.relocate_empty();

            if self.is_solvable() && !self.is_solved() {
                return;
            }
        }
    }

    // Rescan for the empty slot after a whole-board permutation
    fn relocate_empty(&mut self) {
        if let Some(position) = self
            .cells
            .indexed_iter()
            .find_map(|((row, col), tile)| tile.is_empty().then_some(GridPos::new(row, col)))
        {
            self.empty_position = position;
        }
    }

    /// Check whether the current arrangement can reach the solved board
    pub fn is_solvable(&self) -> bool {
        let origin_indices: Vec<usize> = self
            .cells
            .iter()
            .filter(|tile| !tile.is_empty())
            .map(|tile| tile.origin().index(self.size))
            .collect();

        parity::is_solvable_arrangement(&origin_indices, self.size, self.empty_position.row)
    }

    /// Attempt to slide the tile at `target` into the empty slot
    ///
    /// Only a tile sharing an edge with the empty slot can move. Rejected
    /// attempts leave the board untouched, so out-of-bounds targets and
    /// stray clicks are safe to feed through unchecked.
    pub fn try_move(&mut self, target: GridPos) -> MoveResult {
        if target.row >= self.size || target.col >= self.size {
            return MoveResult::Rejected;
        }
        if !target.is_adjacent(self.empty_position) {
            return MoveResult::Rejected;
        }

        let empty = self.empty_position;
        self.cells
            .swap((target.row, target.col), (empty.row, empty.col));
        self.empty_position = target;
        MoveResult::Accepted
    }

    /// Check whether every tile, including the empty slot, sits at its origin
    pub fn is_solved(&self) -> bool {
        self.cells
            .indexed_iter()
            .all(|((row, col), tile)| tile.origin() == GridPos::new(row, col))
    }

    /// Board dimension N for an N x N board
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Current location of the empty slot
    pub const fn empty_position(&self) -> GridPos {
        self.empty_position
    }

    /// Tile at `position`, or `None` when the position is off the board
    pub fn tile_at(&self, position: GridPos) -> Option<&Tile<C>> {
        self.cells.get((position.row, position.col))
    }

    /// Iterate over all cells with their board positions in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (GridPos, &Tile<C>)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), tile)| (GridPos::new(row, col), tile))
    }
}

// Boards below 2x2 cannot move and huge boards exhaust memory during resize
pub(crate) fn validate_size(size: usize) -> Result<usize> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(invalid_parameter(
            "grid_size",
            &size,
            &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
        ));
    }

    Ok(size * size)
}
