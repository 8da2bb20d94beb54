use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase or its infrastructure indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Argon2 could not hash or parse a password hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// The object store rejected an upload or delete.
    #[error("Storage operation failed: {0}")]
    Storage(String),

    /// Spreadsheet generation failed.
    #[error(transparent)]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// PDF generation failed.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// The email API answered with a non-success status.
    #[error("Email API returned status {status}: {body}")]
    EmailRejected {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}
