use thiserror::Error;

/// Error types for catalog lookups.
///
/// These errors only ever surface from individual [`TrackSource`](crate::TrackSource)
/// calls. The resolution pipeline recovers from all of them internally —
/// [`TrackResolver::resolve`](crate::TrackResolver::resolve) has no error channel
/// and always produces a track.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use birthday_jukebox::{ItunesSource, JukeboxConfig, JukeboxError, TrackSource};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let http_client = http_client::native::NativeClient::new();
/// let source = ItunesSource::new(Arc::new(http_client), &JukeboxConfig::default());
///
/// match source.search("1985 synth", 1985).await {
///     Ok(tracks) => println!("found {} candidates", tracks.len()),
///     Err(JukeboxError::Timeout { timeout_ms }) => {
///         eprintln!("gave up after {timeout_ms} ms");
///     }
///     Err(JukeboxError::Status { code }) => eprintln!("catalog answered {code}"),
///     Err(e) => eprintln!("lookup failed: {e}"),
/// }
/// # });
/// ```
#[derive(Error, Debug)]
pub enum JukeboxError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, DNS errors, and other low-level
    /// transport issues.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The catalog did not answer within the request timeout.
    ///
    /// The underlying transport operation is aborted when this fires; the
    /// caller moves on to the next search term or source.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that was exceeded, in milliseconds
        timeout_ms: u64,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("request failed with status {code}")]
    Status {
        /// The HTTP status code returned by the catalog
        code: u16,
    },

    /// Failed to parse a catalog response body.
    ///
    /// This covers malformed JSON and responses that do not match the
    /// documented search result shape. Individual records missing required
    /// fields do not produce this error; they are dropped during mapping.
    #[error("failed to parse response: {0}")]
    Parse(String),
}
