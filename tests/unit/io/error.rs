//! Tests for error display formatting and source chaining

#[cfg(test)]
mod tests {
    use picslide::io::error::{PuzzleError, invalid_parameter, terminal_error};
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Tests each variant renders its context into the message
    // Verified against the exact display strings
    #[test]
    fn test_display_carries_context() {
        let too_small = PuzzleError::ImageTooSmall {
            path: PathBuf::from("images/cat.png"),
            width: 2,
            height: 9,
            min_pixels: 3,
        };
        assert_eq!(
            too_small.to_string(),
            "Image 'images/cat.png' is 2x9, needs at least 3x3"
        );

        let invalid = invalid_parameter("grid_size", &1, &"must be between 2 and 16");
        assert_eq!(
            invalid.to_string(),
            "Invalid parameter 'grid_size' = '1': must be between 2 and 16"
        );

        let terminal = terminal_error("poll input", io::Error::other("tty gone"));
        assert_eq!(
            terminal.to_string(),
            "Terminal error during poll input: tty gone"
        );

        let file_system = PuzzleError::FileSystem {
            path: PathBuf::from("images"),
            operation: "read directory",
            source: io::Error::other("denied"),
        };
        assert_eq!(
            file_system.to_string(),
            "File system error during read directory on 'images': denied"
        );
    }

    // Tests the image load message keeps the decoder's own words
    // Verified with a wrapped I/O failure
    #[test]
    fn test_image_load_display_wraps_decoder_error() {
        let load = PuzzleError::ImageLoad {
            path: PathBuf::from("x.png"),
            source: image::ImageError::IoError(io::Error::other("bad file")),
        };

        let message = load.to_string();
        assert!(message.contains("Failed to load image 'x.png'"));
        assert!(message.contains("bad file"));
    }

    // Tests source chaining exposes underlying errors where one exists
    // Verified per variant
    #[test]
    fn test_source_chain() {
        let terminal = terminal_error("draw board", io::Error::other("broken pipe"));
        assert!(terminal.source().is_some());

        let load = PuzzleError::ImageLoad {
            path: PathBuf::from("x.png"),
            source: image::ImageError::IoError(io::Error::other("bad file")),
        };
        assert!(load.source().is_some());

        let file_system = PuzzleError::FileSystem {
            path: PathBuf::from("images"),
            operation: "read directory",
            source: io::Error::other("denied"),
        };
        assert!(file_system.source().is_some());

        let invalid = invalid_parameter("seed", &0, &"unused");
        assert!(invalid.source().is_none());

        let too_small = PuzzleError::ImageTooSmall {
            path: PathBuf::from("x.png"),
            width: 1,
            height: 1,
            min_pixels: 2,
        };
        assert!(too_small.source().is_none());
    }

    // Tests the helper stringifies values of any displayable type
    // Verified with numeric and textual inputs
    #[test]
    fn test_invalid_parameter_helper() {
        let numeric = invalid_parameter("tile_pixels", &4096, &"too large");
        assert!(matches!(
            numeric,
            PuzzleError::InvalidParameter {
                parameter: "tile_pixels",
                ..
            }
        ));
        assert!(numeric.to_string().contains("'4096'"));

        let text = invalid_parameter("image_dir", &"nowhere", &"not a directory");
        assert!(text.to_string().contains("'nowhere'"));
    }
}
