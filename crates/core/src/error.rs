//! Error types for the osi-sim system.
//!
//! All fallible operations return structured errors rather than panicking.
//! Malformed envelopes (a tagged payload missing its separator) are NOT
//! errors: per the layer contract they pass through unchanged.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Order: serializing/parsing the order payload
/// - Decode: reversing the presentation layer's transfer encoding
/// - Utf8: decoded bytes that are not valid text
/// - MediumEmpty: pulling from the mock medium out of turn
/// - Config: CLI arguments or network identifiers that don't parse
#[derive(Debug, Error)]
pub enum Error {
    /// Order payload (de)serialization failed
    #[error("order payload error: {0}")]
    Order(#[from] serde_json::Error),

    /// Presentation layer could not reverse the transfer encoding
    #[error("transfer decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded payload is not valid UTF-8 text
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Receive was called on an empty medium.
    ///
    /// The exchange is strictly turn-based, so an empty pull can only be
    /// protocol misuse (a receive with no matching send).
    #[error("mock medium is empty: receive called with nothing in flight")]
    MediumEmpty,

    /// Configuration error (bad flag value, unparseable identifier)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
