use thiserror::Error;

/// Errors returned by live-data providers.
///
/// The engine never propagates these; each one becomes a
/// [`FallbackReason`](crate::FallbackReason) recorded in the enrichment
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The request exceeded its timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The URL that was requested.
        url: String,
        /// The configured timeout in seconds.
        timeout_secs: u64,
    },

    /// A network-level error occurred (connection refused, DNS failure).
    #[error("network error for {url}: {message}")]
    NetworkError {
        /// The URL that was requested.
        url: String,
        /// Description of the network error.
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error message or response body excerpt.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to parse response: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The service answered successfully but had nothing usable.
    #[error("{service} returned no data for {subject}")]
    NoData {
        /// Which service was asked.
        service: &'static str,
        /// What it was asked about.
        subject: String,
    },

    /// Live lookups are switched off for this run.
    #[error("live lookups are disabled")]
    Disabled,
}
