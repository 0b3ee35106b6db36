//! Error types for the validator front-end.
//!
//! - [`FileRejection`] - upload checks that refuse a selected file
//! - [`StorageError`] - localStorage access for the theme flag
//! - [`ClipboardError`] - clipboard write failures

use thiserror::Error;

use crate::config::messages;

/// Reason a selected file was refused by the upload guard.
///
/// `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// File is larger than [`crate::config::MAX_FILE_SIZE`].
    #[error("{}", messages::FILE_TOO_LARGE)]
    TooLarge { size: u64, limit: u64 },
    /// Extension is not one of [`crate::config::ALLOWED_EXTENSIONS`].
    #[error("{}", messages::UNSUPPORTED_EXTENSION)]
    UnsupportedExtension { extension: String },
}

/// Errors from the key/value store backing the theme flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage is not available (private mode, sandboxed frame).
    #[error("localStorage not available")]
    Unavailable,
    /// The browser refused the write (quota, security error).
    #[error("failed to save to localStorage: {0}")]
    WriteFailed(String),
}

/// Errors from copying text to the system clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The async clipboard promise rejected.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    /// The legacy `execCommand("copy")` path failed.
    #[error("legacy copy failed")]
    LegacyCopyFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_are_user_facing() {
        let too_large = FileRejection::TooLarge {
            size: 20,
            limit: 10,
        };
        assert_eq!(too_large.to_string(), messages::FILE_TOO_LARGE);

        let bad_ext = FileRejection::UnsupportedExtension {
            extension: "csv".into(),
        };
        assert_eq!(bad_ext.to_string(), messages::UNSUPPORTED_EXTENSION);
    }

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::WriteFailed("QuotaExceededError".into()).to_string(),
            "failed to save to localStorage: QuotaExceededError"
        );
    }
}
