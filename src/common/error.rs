//! Error types for litlesql.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the storage engine.
///
/// The variants fall into four classes:
/// - validation errors (`InvalidId`, `FieldTooLong`, `NulInField`):
///   statement rejected, table unchanged
/// - logical conflicts (`DuplicateKey`): no mutation performed
/// - capacity limits (`InternalSplitUnsupported`): the insert is abandoned
///   before any page is touched
/// - I/O and corruption (`Io`, `CorruptFile`, `CorruptNode`,
///   `CorruptCellCount`, `PageNotFound`): fatal to the whole session
///
/// The `Display` text of the first three classes is what the command layer
/// prints verbatim.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from disk operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database file length is not a whole number of pages.
    #[error("Db file is not a whole number of pages ({file_length} bytes). Corrupt file.")]
    CorruptFile { file_length: u64 },

    /// A page carries a node type tag we don't know.
    #[error("Page {page} has unknown node type {tag}. Corrupt file.")]
    CorruptNode { page: u32, tag: u8 },

    /// A node claims more cells (or keys) than a page can hold.
    #[error("Page {page} claims {count} cells, at most {max} fit. Corrupt file.")]
    CorruptCellCount { page: u32, count: u32, max: u32 },

    /// Requested page was never allocated.
    #[error("Page {0} not found")]
    PageNotFound(u32),

    /// Row id is zero or negative.
    #[error("ID must be positive.")]
    InvalidId,

    /// Username or email exceeds its column width.
    #[error("String is to long.")]
    FieldTooLong,

    /// Username or email contains a NUL byte, which the row format uses as
    /// its terminator.
    #[error("String must not contain NUL bytes.")]
    NulInField,

    /// A row with the same id already exists.
    #[error("Error: Duplicate key.")]
    DuplicateKey,

    /// The insert needs to split an internal node, which is not supported.
    #[error("Need to implement splitting internal node")]
    InternalSplitUnsupported,
}

impl Error {
    /// Whether the error invalidates the whole session.
    ///
    /// Non-fatal errors reject a single statement and leave every committed
    /// page intact, so the caller may keep issuing commands.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::CorruptFile { .. }
                | Error::CorruptNode { .. }
                | Error::CorruptCellCount { .. }
                | Error::PageNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidId.to_string(), "ID must be positive.");
        assert_eq!(Error::FieldTooLong.to_string(), "String is to long.");
        assert_eq!(Error::DuplicateKey.to_string(), "Error: Duplicate key.");
        assert_eq!(
            Error::InternalSplitUnsupported.to_string(),
            "Need to implement splitting internal node"
        );
        assert_eq!(Error::PageNotFound(42).to_string(), "Page 42 not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_fatal_classification() {
        assert!(Error::CorruptFile { file_length: 10 }.is_fatal());
        assert!(Error::PageNotFound(3).is_fatal());
        let corrupt = Error::CorruptCellCount {
            page: 0,
            count: 99,
            max: 13,
        };
        assert!(corrupt.is_fatal());
        assert!(!Error::NulInField.is_fatal());
        assert!(!Error::InvalidId.is_fatal());
        assert!(!Error::FieldTooLong.is_fatal());
        assert!(!Error::DuplicateKey.is_fatal());
        assert!(!Error::InternalSplitUnsupported.is_fatal());
    }
}
