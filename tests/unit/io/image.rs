//! Tests for board image loading, resizing and slicing into tiles

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use picslide::io::configuration::MAX_TILE_PIXELS;
    use picslide::io::error::PuzzleError;
    use picslide::io::image::{PictureSource, load_board_image, slice_into_tiles};
    use picslide::puzzle::session::TileSource;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn save_solid_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([40, 80, 120, 255]))
            .save(path)
            .unwrap();
    }

    // Tests loading stretches any source to an exact board square
    // Verified with a non-square source image
    #[test]
    fn test_load_resizes_to_board_square() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        save_solid_png(&path, 10, 6);

        let board = load_board_image(&path, 2, 4).unwrap();

        assert_eq!(board.dimensions(), (8, 8));
    }

    // Tests a picture with fewer pixels than tiles is refused
    // Verified by matching the reported dimensions
    #[test]
    fn test_load_rejects_tiny_pictures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        save_solid_png(&path, 2, 5);

        let error = load_board_image(&path, 3, 4).unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::ImageTooSmall {
                width: 2,
                height: 5,
                min_pixels: 3,
                ..
            }
        ));
    }

    // Tests tile pixel bounds are validated before any file access
    // Verified with zero and past-the-cap sizes on a missing file
    #[test]
    fn test_load_rejects_bad_tile_pixels() {
        let missing = Path::new("never-created.png");

        let zero = load_board_image(missing, 3, 0).unwrap_err();
        assert!(matches!(
            zero,
            PuzzleError::InvalidParameter {
                parameter: "tile_pixels",
                ..
            }
        ));

        let huge = load_board_image(missing, 3, MAX_TILE_PIXELS + 1).unwrap_err();
        assert!(matches!(
            huge,
            PuzzleError::InvalidParameter {
                parameter: "tile_pixels",
                ..
            }
        ));
    }

    // Tests unreadable and undecodable files surface as load errors
    // Verified with a missing path and a text file in disguise
    #[test]
    fn test_load_reports_broken_files() {
        let missing = load_board_image(Path::new("never-created.png"), 3, 4).unwrap_err();
        assert!(matches!(missing, PuzzleError::ImageLoad { .. }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        fs::write(&path, b"not an image at all").unwrap();

        let corrupt = load_board_image(&path, 3, 4).unwrap_err();
        assert!(matches!(corrupt, PuzzleError::ImageLoad { .. }));
    }

    // Tests slicing walks the board row-major with exact tile sizes
    // Verified against a quadrant-coloured source
    #[test]
    fn test_slice_into_tiles_row_major() {
        let board = RgbaImage::from_fn(8, 8, |x, y| match (x < 4, y < 4) {
            (true, true) => Rgba([255, 0, 0, 255]),
            (false, true) => Rgba([0, 255, 0, 255]),
            (true, false) => Rgba([0, 0, 255, 255]),
            (false, false) => Rgba([255, 255, 0, 255]),
        });

        let tiles = slice_into_tiles(&board, 2, 4);

        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|tile| tile.dimensions() == (4, 4)));

        let top_left = tiles.first().unwrap();
        assert!(top_left.pixels().all(|pixel| pixel.0 == [255, 0, 0, 255]));

        let top_right = tiles.get(1).unwrap();
        assert!(top_right.pixels().all(|pixel| pixel.0 == [0, 255, 0, 255]));

        let bottom_left = tiles.get(2).unwrap();
        assert!(bottom_left.pixels().all(|pixel| pixel.0 == [0, 0, 255, 255]));

        let bottom_right = tiles.get(3).unwrap();
        assert!(
            bottom_right
                .pixels()
                .all(|pixel| pixel.0 == [255, 255, 0, 255])
        );
    }

    // Tests the file-backed source loads one full board per image
    // Verified by counting tiles and checking their edges
    #[test]
    fn test_picture_source_loads_boards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        save_solid_png(&path, 20, 20);

        let mut source = PictureSource::new(vec![path], 3, 5);

        assert_eq!(source.count(), 1);

        let tiles = source.load(0).unwrap();
        assert_eq!(tiles.len(), 9);
        assert!(tiles.iter().all(|tile| tile.dimensions() == (5, 5)));
    }

    // Tests loading past the end of the source is an error
    // Verified on an empty path list
    #[test]
    fn test_picture_source_rejects_unknown_index() {
        let mut source = PictureSource::new(Vec::<PathBuf>::new(), 3, 5);

        assert_eq!(source.count(), 0);
        assert!(source.load(0).is_err());
    }

    // Tests a broken file in the list fails that load alone
    // Verified by loading the good neighbour afterwards
    #[test]
    fn test_picture_source_isolates_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        save_solid_png(&good, 20, 20);
        let bad = dir.path().join("bad.png");
        fs::write(&bad, b"garbage").unwrap();

        let mut source = PictureSource::new(vec![bad, good], 2, 4);

        assert!(source.load(0).is_err());
        assert_eq!(source.load(1).unwrap().len(), 4);
    }
}
