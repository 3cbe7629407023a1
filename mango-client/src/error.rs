//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed, including malformed response bodies
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// QR encoding failed
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// Open requested on a table that already has a session
    #[error("Table {0} is already occupied")]
    TableOccupied(String),

    /// Close requested on a table with no open session
    #[error("Table {0} has no open session")]
    TableIdle(String),

    /// Status advance requested on an order with no forward edge
    #[error("Order {0} has no next status")]
    TerminalStatus(i64),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
