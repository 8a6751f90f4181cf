use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the Backdrop-Compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Failed to process {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding, scaling or encoding a single image
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to decode image: {reason}")]
    DecodeFailed { reason: String },

    #[error("Image encoding failed: {reason}")]
    EncodeFailed { reason: String },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to render configuration: {reason}")]
    SerializeFailed { reason: String },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Input {
                path,
                source: ImageError::DecodeFailed { reason },
            } => {
                format!(
                    "Could not read image '{}' ({}). Please check the file is a valid PNG or JPEG.",
                    path.display(),
                    reason
                )
            }
            Self::Input {
                path,
                source: ImageError::InvalidDimensions { width, height },
            } => {
                format!(
                    "Image '{}' cannot be scaled: the resized overlay would be {}x{} pixels.",
                    path.display(),
                    width,
                    height
                )
            }
            Self::Write { path, source } => {
                format!("Could not save '{}': {}", path.display(), source)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_names_the_file() {
        let err = CompositorError::Input {
            path: PathBuf::from("input_images/broken.png"),
            source: ImageError::DecodeFailed {
                reason: "unexpected EOF".to_string(),
            },
        };

        let message = err.user_message();
        assert!(message.contains("broken.png"));
        assert!(message.contains("unexpected EOF"));
    }

    #[test]
    fn test_dimension_failure_names_the_file() {
        let err = CompositorError::Input {
            path: PathBuf::from("input_images/needle.png"),
            source: ImageError::InvalidDimensions {
                width: 0,
                height: 2500,
            },
        };

        let message = err.user_message();
        assert!(message.contains("needle.png"));
        assert!(message.contains("0x2500"));
        assert!(err.to_string().contains("needle.png"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = CompositorError::Write {
            path: PathBuf::from("output_images/a.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("a.png"));
    }

    #[test]
    fn test_generic_messages_fall_back_to_display() {
        let err: CompositorError = ConfigError::InvalidValue {
            key: "canvas.width".to_string(),
            value: "0".to_string(),
        }
        .into();

        assert_eq!(err.user_message(), err.to_string());
    }
}
