//! Image loading, resizing, and slicing into board tiles

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{GenericImageView, RgbaImage};

use crate::io::configuration::MAX_TILE_PIXELS;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::session::TileSource;

/// Load an image and resize it to cover an N x N board exactly
///
/// The decoded picture is stretched to a square of `grid_size * tile_pixels`
/// on each edge, so every sliced tile comes out `tile_pixels` square
/// regardless of the source's aspect ratio.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded,
/// `ImageTooSmall` if the decoded picture has fewer pixels along an edge
/// than the board has tiles, and `InvalidParameter` for a tile size of
/// zero or beyond the allocation limit.
pub fn load_board_image(path: &Path, grid_size: usize, tile_pixels: u32) -> Result<RgbaImage> {
    if tile_pixels == 0 || tile_pixels > MAX_TILE_PIXELS {
        return Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &format!("must be between 1 and {MAX_TILE_PIXELS}"),
        ));
    }

    let decoded = image::open(path).map_err(|e| PuzzleError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let min_pixels = grid_size as u32;
    let (width, height) = decoded.dimensions();
    if width < min_pixels || height < min_pixels {
        return Err(PuzzleError::ImageTooSmall {
            path: path.to_path_buf(),
            width,
            height,
            min_pixels,
        });
    }

    let side = min_pixels * tile_pixels;
    Ok(decoded
        .resize_exact(side, side, FilterType::CatmullRom)
        .to_rgba8())
}

/// Cut a board image into row-major tile contents
///
/// The crop walks rows top to bottom and columns left to right, matching
/// the row-major origin tagging in the grid builder.
pub fn slice_into_tiles(board: &RgbaImage, grid_size: usize, tile_pixels: u32) -> Vec<RgbaImage> {
    let mut tiles = Vec::with_capacity(grid_size * grid_size);

    for row in 0..grid_size {
        for col in 0..grid_size {
            let x = col as u32 * tile_pixels;
            let y = row as u32 * tile_pixels;
            tiles.push(image::imageops::crop_imm(board, x, y, tile_pixels, tile_pixels).to_image());
        }
    }

    tiles
}

/// Tile source backed by image files on disk
///
/// Images load lazily, one per [`TileSource::load`] call, so a corrupt
/// file is only discovered when the session reaches it.
#[derive(Debug, Clone)]
pub struct PictureSource {
    paths: Vec<PathBuf>,
    grid_size: usize,
    tile_pixels: u32,
}

impl PictureSource {
    /// Create a source over `paths`, slicing each image for an N x N board
    pub const fn new(paths: Vec<PathBuf>, grid_size: usize, tile_pixels: u32) -> Self {
        Self {
            paths,
            grid_size,
            tile_pixels,
        }
    }
}

impl TileSource for PictureSource {
    type Content = RgbaImage;

    fn count(&self) -> usize {
        self.paths.len()
    }

    fn load(&mut self, index: usize) -> Result<Vec<RgbaImage>> {
        let path = self
            .paths
            .get(index)
            .ok_or_else(|| invalid_parameter("index", &index, &"no image at this position"))?;

        let board = load_board_image(path, self.grid_size, self.tile_pixels)?;
        Ok(slice_into_tiles(&board, self.grid_size, self.tile_pixels))
    }
}
