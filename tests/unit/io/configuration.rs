//! Tests for game constants and their internal consistency

#[cfg(test)]
mod tests {
    use picslide::io::configuration::{
        CONTROLS_HINT, DEFAULT_GRID_SIZE, DEFAULT_IMAGE_DIR, DEFAULT_SEED, DEFAULT_TILE_PIXELS,
        EXHAUSTED_BANNER, HEADER_ROWS, INPUT_POLL_INTERVAL_MS, MAX_GRID_SIZE, MAX_TILE_PIXELS,
        MIN_GRID_SIZE, PROGRESS_BAR_WIDTH, SOLVED_BANNER, SUPPORTED_EXTENSIONS, TILE_CELL_HEIGHT,
        TILE_CELL_WIDTH,
    };

    // Tests the board size limits bracket the default
    // Verified by moving the default outside the range
    #[test]
    fn test_grid_size_limits() {
        assert_eq!(MIN_GRID_SIZE, 2);
        assert_eq!(MAX_GRID_SIZE, 16);
        assert_eq!(DEFAULT_GRID_SIZE, 3);
        assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&DEFAULT_GRID_SIZE));
    }

    // Tests tile pixel defaults stay inside the resize safety cap
    // Verified by raising the default past the cap
    #[test]
    fn test_tile_pixel_limits() {
        assert_eq!(DEFAULT_TILE_PIXELS, 100);
        assert!(DEFAULT_TILE_PIXELS <= MAX_TILE_PIXELS);
        assert!(MAX_TILE_PIXELS >= 1);
    }

    // Tests default seed is fixed for reproducible runs
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests catalog settings cover the shipped image formats
    // Verified by adding an uppercase extension
    #[test]
    fn test_catalog_settings() {
        assert_eq!(DEFAULT_IMAGE_DIR, "images");
        assert_eq!(SUPPORTED_EXTENSIONS, &["jpg", "png"]);
        assert!(
            SUPPORTED_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    // Tests terminal geometry leaves room for tile labels and the header
    // Verified by shrinking a cell below its gutter
    #[test]
    fn test_terminal_geometry() {
        assert!(TILE_CELL_WIDTH >= 4);
        assert!(TILE_CELL_HEIGHT >= 2);
        assert_eq!(HEADER_ROWS, 2);
        assert!(PROGRESS_BAR_WIDTH > 0);
    }

    // Tests the input poll interval stays responsive without spinning
    // Verified by dropping the interval to zero
    #[test]
    fn test_input_poll_interval() {
        assert!((16..=1000).contains(&INPUT_POLL_INTERVAL_MS));
    }

    // Tests the banners tell the player what a key press will do
    // Verified by rewording the banners
    #[test]
    fn test_player_banners() {
        assert!(SOLVED_BANNER.contains("next"));
        assert!(EXHAUSTED_BANNER.contains("exit"));
        assert!(CONTROLS_HINT.contains("q: quit"));
        assert!(CONTROLS_HINT.contains("n: next"));
    }
}
