//! Error types for export recovery

use thiserror::Error;

/// Errors that can occur while recovering records from an export file
#[derive(Error, Debug)]
pub enum ParseError {
    /// No candidate text encoding could decode the document. The only
    /// fatal, whole-document failure; everything else is per-row.
    #[error("Failed to decode document: {0}")]
    Decode(String),

    /// A row segment did not yield enough columns to recover a record
    #[error("Malformed row {email_id}: {details}")]
    MalformedRow { email_id: String, details: String },

    /// The row's identifier was missing or a header echo; the row is
    /// dropped from output without surfacing a hard error
    #[error("Row rejected: invalid identifier {email_id:?}")]
    RejectedRow { email_id: String },
}

/// Result type for export recovery operations
pub type Result<T> = std::result::Result<T, ParseError>;
