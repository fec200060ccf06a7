//! Error types for map generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and export operations
#[derive(Debug)]
pub enum GenerationError {
    /// Grid too small (or too large) for the configured room sizes
    InvalidDimensions {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
        /// Smallest width that can hold a room
        minimum_width: usize,
        /// Smallest height that can hold a room
        minimum_height: usize,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Room placement exhausted its retry budget before placing two rooms
    ///
    /// Without at least one corridor there is nowhere to put the avatar.
    InsufficientRooms {
        /// Rooms accepted before the budget ran out
        placed: usize,
        /// Rejected placement attempts
        retries: usize,
    },

    /// A corridor was requested for a room whose floor was never filled
    UnopenedRoom {
        /// Id of the room without an opening point
        room_id: usize,
    },

    /// The candidate queue ran dry before every room was connected
    SelectionExhausted {
        /// Corridors accepted so far
        accepted: usize,
        /// Corridors needed for a spanning tree
        required: usize,
    },

    /// Failed to save a map image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Stable machine-readable reason code
    pub const fn reason_code(&self) -> &'static str {
        match self {
            Self::InvalidDimensions { .. } => "invalid-dimensions",
            Self::InvalidParameter { .. } => "invalid-parameter",
            Self::InsufficientRooms { .. } => "insufficient-rooms",
            Self::UnopenedRoom { .. } => "unopened-room",
            Self::SelectionExhausted { .. } => "selection-exhausted",
            Self::ImageExport { .. } => "image-export",
            Self::FileSystem { .. } => "file-system",
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                minimum_width,
                minimum_height,
            } => {
                write!(
                    f,
                    "Invalid grid dimensions {width}x{height}: need at least {minimum_width}x{minimum_height}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InsufficientRooms { placed, retries } => {
                write!(
                    f,
                    "Only {placed} room(s) placed after {retries} rejected attempts (need at least 2)"
                )
            }
            Self::UnopenedRoom { room_id } => {
                write!(f, "Room {room_id} has no opening point")
            }
            Self::SelectionExhausted { accepted, required } => {
                write!(
                    f,
                    "Corridor candidates exhausted after accepting {accepted} of {required}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
