//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use grid2048::GameError;
    use grid2048::io::error::invalid_parameter;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = GameError::FileSystem {
            path: "/tmp/screenshots".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/screenshots"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("value", &3, &"tile values must be powers of two");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'value' = '3': tile values must be powers of two"
        );
        assert!(error.source().is_none());
    }

    // Tests I/O errors convert into terminal errors
    // Verified by converting into FileSystem without a path
    #[test]
    fn test_io_error_conversion() {
        let error: GameError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();

        assert!(matches!(error, GameError::Terminal { .. }));
        assert!(error.to_string().starts_with("Terminal I/O failed"));
        assert!(error.source().is_some());
    }

    // Tests image export errors name the target path
    // Verified by dropping the path from the message
    #[test]
    fn test_image_export_error() {
        let source = image::ImageError::IoError(std::io::Error::other("disk full"));
        let error = GameError::ImageExport {
            path: "shots/screenshot_1.png".into(),
            source,
        };

        assert!(error.to_string().contains("shots/screenshot_1.png"));
        assert!(error.source().is_some());
    }
}
