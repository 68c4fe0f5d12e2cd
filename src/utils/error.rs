use crate::domain::model::Coordinates;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MowerError {
    #[error("Invalid coordinates '({x}, {y})'")]
    InvalidCoordinates { x: String, y: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("'{coordinates}' out of plateau")]
    OutOfBounds { coordinates: Coordinates },

    #[error("'{coordinates}' already occupied")]
    PositionOccupied { coordinates: Coordinates },

    #[error("No mower registered at '{coordinates}'")]
    NotOnPlateau { coordinates: Coordinates },

    #[error("Mower with id '{id}' not found")]
    MowerNotFound { id: String },

    #[error("Plateau '{id}' not found")]
    PlateauNotFound { id: usize },

    #[error("Unprocessable input: {input:?}")]
    InvalidInput {
        input: String,
        #[source]
        source: Box<MowerError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Movement,
    Lookup,
    Configuration,
    System,
}

impl MowerError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_input(input: &str, source: MowerError) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            source: Box::new(source),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCoordinates { .. }
            | Self::InvalidArgument { .. }
            | Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::OutOfBounds { .. } | Self::PositionOccupied { .. } | Self::NotOnPlateau { .. } => {
                ErrorCategory::Movement
            }
            Self::MowerNotFound { .. } | Self::PlateauNotFound { .. } => ErrorCategory::Lookup,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Exit status used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Movement => 3,
            ErrorCategory::Lookup => 4,
            ErrorCategory::System => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { source, .. } => {
                format!("The mission document could not be read ({})", source)
            }
            Self::OutOfBounds { coordinates } => {
                format!("A mower tried to leave the plateau at {}", coordinates)
            }
            Self::PositionOccupied { coordinates } => {
                format!("A mower tried to move onto another mower at {}", coordinates)
            }
            Self::IoError(e) => format!("Could not access a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the first line holds the plateau bounds and each mower has a position line and an instruction line"
            }
            ErrorCategory::Movement => {
                "Review the instruction strings or run with --plateau-mode isolated"
            }
            ErrorCategory::Lookup => "Use an identifier returned when the mower was created",
            ErrorCategory::Configuration => "Check the command line flags and the TOML file",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, MowerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_messages() {
        let err = MowerError::OutOfBounds {
            coordinates: Coordinates::new(0, -1),
        };
        assert_eq!(err.to_string(), "'(0, -1)' out of plateau");
        assert_eq!(err.category(), ErrorCategory::Movement);

        let err = MowerError::PositionOccupied {
            coordinates: Coordinates::new(2, 3),
        };
        assert_eq!(err.to_string(), "'(2, 3)' already occupied");
    }

    #[test]
    fn test_invalid_input_keeps_source() {
        let err = MowerError::invalid_input("5 5\n1 2 X", MowerError::invalid_argument("bad heading"));
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 2);

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Invalid argument: bad heading"));
    }

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        let codes = [
            MowerError::ConfigError { message: "x".into() }.exit_code(),
            MowerError::invalid_argument("x").exit_code(),
            MowerError::NotOnPlateau { coordinates: Coordinates::new(0, 0) }.exit_code(),
            MowerError::MowerNotFound { id: "x".into() }.exit_code(),
            MowerError::IoError(std::io::Error::other("x")).exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3, 4, 5]);
    }
}
