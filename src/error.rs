//! Crate-level error types.
//!
//! [`BlackbudaError`] unifies every error source (configuration, HTTP,
//! JSON, malformed exchange payloads, and the two degenerate-data cases)
//! behind a single enum so callers can match on the variant they care
//! about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlackbudaError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum BlackbudaError {
    /// An environment variable was missing, malformed, or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed (connect, timeout, non-2xx status, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded but a field was absent or not a number.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No sell trades in the requested window, so the volume-weighted
    /// average price has a zero divisor.
    #[error("no sell trades in the requested window")]
    NoSellTrades,

    /// The prior-year volume is zero, so the percentage change has a zero
    /// divisor.
    #[error("prior-year volume is zero, percentage change is undefined")]
    ZeroBaseline,
}
