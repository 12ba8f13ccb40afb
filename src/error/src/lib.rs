//! Shared error handling for the pattern crates
//!
//! Every operation in the workspace is a total function except building a
//! decorator chain without a base drink and writing to the output sink.

use thiserror::Error;

/// Errors that can surface while assembling or presenting a demo
#[derive(Debug, Error)]
pub enum PatternError {
    /// A condiment was asked to wrap a beverage that does not exist
    #[error("Invalid construction: condiment has no beverage to wrap")]
    MissingBase,

    /// Writing demonstration output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    /// True for failures caused by the caller building something invalid
    pub fn is_invalid_construction(&self) -> bool {
        matches!(self, PatternError::MissingBase)
    }
}

/// Convert an error into a short message suitable for the console
pub fn handle_error(error: &PatternError) -> String {
    match error {
        PatternError::MissingBase => "Pick a base drink before adding condiments".to_string(),
        PatternError::Io(e) => match e.kind() {
            std::io::ErrorKind::BrokenPipe => "Output closed early".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to write output".to_string(),
            _ => format!("IO error: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_is_invalid_construction() {
        let err = PatternError::MissingBase;
        assert!(err.is_invalid_construction());
        assert_eq!(handle_error(&err), "Pick a base drink before adding condiments");
    }

    #[test]
    fn io_errors_convert_and_map_to_messages() {
        let err: PatternError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(!err.is_invalid_construction());
        assert_eq!(handle_error(&err), "Output closed early");

        let err: PatternError = std::io::Error::other("disk on fire").into();
        assert_eq!(handle_error(&err), "IO error: disk on fire");
    }
}
