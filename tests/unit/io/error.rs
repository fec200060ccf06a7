//! Tests for error messages, reason codes and sources

#[cfg(test)]
mod tests {
    use dungeongen::io::error::{GenerationError, invalid_parameter};
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Verifies messages carry the offending values
    // Verified by omitting the minimum from the dimension message
    #[test]
    fn test_display_messages() {
        let dimensions = GenerationError::InvalidDimensions {
            width: 9,
            height: 9,
            minimum_width: 10,
            minimum_height: 10,
        };
        assert_eq!(
            dimensions.to_string(),
            "Invalid grid dimensions 9x9: need at least 10x10"
        );

        let parameter = invalid_parameter("max_retries", &0, &"must be positive");
        assert_eq!(
            parameter.to_string(),
            "Invalid parameter 'max_retries' = '0': must be positive"
        );

        let exhausted = GenerationError::SelectionExhausted {
            accepted: 2,
            required: 4,
        };
        assert!(exhausted.to_string().contains("2 of 4"));
    }

    // Tests every variant has its own reason code
    // Verified by reusing a code across variants
    #[test]
    fn test_reason_codes() {
        let errors = [
            GenerationError::InvalidDimensions {
                width: 1,
                height: 1,
                minimum_width: 10,
                minimum_height: 10,
            },
            invalid_parameter("seed", &1, &"unused"),
            GenerationError::InsufficientRooms {
                placed: 1,
                retries: 1000,
            },
            GenerationError::UnopenedRoom { room_id: 0 },
            GenerationError::SelectionExhausted {
                accepted: 0,
                required: 1,
            },
            GenerationError::FileSystem {
                path: PathBuf::from("maps"),
                operation: "create directory",
                source: io::Error::other("denied"),
            },
        ];

        let mut codes: Vec<&str> = errors.iter().map(GenerationError::reason_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    // Tests wrapped errors expose their source
    // Verified by returning None for file system errors
    #[test]
    fn test_sources() {
        let wrapped: GenerationError = io::Error::other("disk full").into();
        assert_eq!(wrapped.reason_code(), "file-system");
        assert_eq!(
            wrapped.source().map(ToString::to_string),
            Some("disk full".to_string())
        );

        let plain = GenerationError::UnopenedRoom { room_id: 2 };
        assert!(plain.source().is_none());
    }
}
