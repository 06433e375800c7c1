//! Error types for waveform synthesis

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;

/// Errors that can occur while synthesizing or writing waveforms
#[derive(Error, Debug)]
pub enum SynthError {
    /// A configuration field is out of range (point count, RMS, SNR, ...)
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The sequence fed to min-max normalization has no usable range
    #[error("Degenerate sequence: {0}")]
    DegenerateSequence(String),

    /// Modulation name not recognised
    #[error("Unsupported modulation: {0}")]
    UnsupportedModulation(String),

    /// Writing or reading an artifact failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An artifact line could not be parsed back as a number
    #[error("Malformed value on line {line} of {path}: {value:?}")]
    Malformed {
        path: PathBuf,
        line: usize,
        value: String,
    },
}

impl SynthError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SynthError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SynthError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = SynthError::invalid("point_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `point_count`: must be at least 1"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = SynthError::io(
            "/nowhere/out.csv",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/out.csv"), "message: {}", msg);
        assert!(msg.contains("missing"), "message: {}", msg);
    }
}
