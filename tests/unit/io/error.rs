//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gamutile::TileError;
    use gamutile::io::error::{invalid_parameter, invalid_pattern, surface_error};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TileError::FileSystem {
            path: "/tmp/tiles".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/tiles"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &-1, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests InvalidPattern error names the pattern
    // Verified by omitting the pattern from the message
    #[test]
    fn test_invalid_pattern_error() {
        let error = invalid_pattern(&"AB", &"expected 3 edge labels, found 2");

        assert_eq!(
            error.to_string(),
            "Invalid pattern 'AB': expected 3 edge labels, found 2"
        );
    }

    // Tests alphabet and surface errors format their reason
    // Verified by dropping the operation name
    #[test]
    fn test_alphabet_and_surface_errors() {
        let alphabet = TileError::InvalidAlphabet {
            reason: "at least one edge label is required".to_string(),
        };
        assert!(alphabet.to_string().starts_with("Invalid alphabet"));

        let surface = surface_error("resize", &"cannot resize to 0x3");
        assert_eq!(
            surface.to_string(),
            "Render surface error in resize: cannot resize to 0x3"
        );
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = TileError::ImageExport {
            path: PathBuf::from("/restricted/gamutile-AAA.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/gamutile-AAA.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from library errors
    // Verified by mapping IO errors to image errors
    #[test]
    fn test_from_conversions() {
        let io: TileError = std::io::Error::other("disk full").into();
        assert!(matches!(io, TileError::FileSystem { .. }));

        let image: TileError = image::ImageError::IoError(std::io::Error::other("gone")).into();
        assert!(matches!(image, TileError::ImageExport { .. }));
    }
}
