//! Tile and grid-coordinate value types shared across the puzzle engine

/// Row and column coordinate on a square board
///
/// Rows grow downward and columns grow rightward, matching both the
/// row-major cell storage and terminal drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row index from the top, zero-based
    pub row: usize,
    /// Column index from the left, zero-based
    pub col: usize,
}

impl GridPos {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a row-major cell index into a position on a `size` x `size` board
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Row-major cell index of this position on a `size` x `size` board
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Taxicab distance between two positions
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Check whether two positions share an edge
    ///
    /// A position is never adjacent to itself.
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// A single board cell: where it belongs and what it shows
///
/// The origin is fixed at construction; only the tile's location on the
/// board changes as it slides around. Content is `None` for the empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<C> {
    origin: GridPos,
    content: Option<C>,
}

impl<C> Tile<C> {
    /// Create a tile that belongs at `origin` and carries display content
    pub const fn new(origin: GridPos, content: C) -> Self {
        Self {
            origin,
            content: Some(content),
        }
    }

    /// Create the empty slot, which belongs at `origin` but shows nothing
    pub const fn empty(origin: GridPos) -> Self {
        Self {
            origin,
            content: None,
        }
    }

    /// Solved-board position this tile belongs at
    pub const fn origin(&self) -> GridPos {
        self.origin
    }

    /// Display content, or `None` for the empty slot
    pub const fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Check whether this tile is the empty slot
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
