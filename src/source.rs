use crate::{JukeboxError, Result, Track};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use std::time::Duration;

/// Edge length requested when rewriting artwork URLs.
pub(crate) const ARTWORK_SIZE: u32 = 600;

/// Trait for catalog search backends that can be mocked for testing.
///
/// A source accepts a free-text query term plus a fallback year and returns
/// zero or more normalized [`Track`] candidates, or fails. The two shipped
/// implementations ([`AppleMusicSource`](crate::AppleMusicSource) and
/// [`ItunesSource`](crate::ItunesSource)) differ only in endpoint,
/// authentication, and artwork URL conventions; the resolution pipeline
/// treats them uniformly through this trait.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockTrackSource`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait TrackSource {
    /// Short identifier for log lines.
    fn name(&self) -> &'static str;

    /// Run one catalog search for `term`.
    ///
    /// The call is bounded by the configured request timeout. Records missing
    /// a title or artist are dropped silently; every returned track satisfies
    /// the [`Track`] invariants, with `fallback_year` substituted where the
    /// source record had no usable release date.
    async fn search(&self, term: &str, fallback_year: i32) -> Result<Vec<Track>>;
}

/// Send a request and return its body, bounding the whole exchange by
/// `timeout`. The transport future is dropped (aborted) on timeout.
pub(crate) async fn fetch_body(
    client: &(dyn HttpClient + Send + Sync),
    request: Request,
    timeout: Duration,
) -> Result<String> {
    let timeout_ms = timeout.as_millis() as u64;
    let exchange = async {
        let mut response = client
            .send(request)
            .await
            .map_err(|e| JukeboxError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JukeboxError::Status {
                code: response.status().into(),
            });
        }

        response
            .body_string()
            .await
            .map_err(|e| JukeboxError::Http(e.to_string()))
    };

    match tokio::time::timeout(timeout, exchange).await {
        Ok(result) => result,
        Err(_) => Err(JukeboxError::Timeout { timeout_ms }),
    }
}
