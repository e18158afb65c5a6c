//! iTunes Search API source (secondary, public).

use crate::config::JukeboxConfig;
use crate::source::{fetch_body, TrackSource, ARTWORK_SIZE};
use crate::track::{parse_release_year, Track};
use crate::{JukeboxError, Result};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const ITUNES_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Search client for the public iTunes Search API.
///
/// Needs no authentication, which makes it the safety net behind the
/// Apple Music source when no developer token is configured.
pub struct ItunesSource {
    client: Arc<dyn HttpClient + Send + Sync>,
    storefront: String,
    endpoint: String,
    timeout: Duration,
}

impl ItunesSource {
    /// Create a source against the production iTunes endpoint.
    pub fn new(client: Arc<dyn HttpClient + Send + Sync>, config: &JukeboxConfig) -> Self {
        Self::with_endpoint(client, config, ITUNES_ENDPOINT.to_string())
    }

    /// Create a source against a custom endpoint. Useful for testing.
    pub fn with_endpoint(
        client: Arc<dyn HttpClient + Send + Sync>,
        config: &JukeboxConfig,
        endpoint: String,
    ) -> Self {
        Self {
            client,
            storefront: config.storefront.clone(),
            endpoint,
            timeout: config.request_timeout(),
        }
    }
}

#[async_trait(?Send)]
impl TrackSource for ItunesSource {
    fn name(&self) -> &'static str {
        "itunes"
    }

    async fn search(&self, term: &str, fallback_year: i32) -> Result<Vec<Track>> {
        let url = format!(
            "{}?term={}&media=music&entity=song&limit=25&country={}",
            self.endpoint,
            urlencoding::encode(term),
            urlencoding::encode(&self.storefront)
        );
        let parsed_url = url
            .parse::<Url>()
            .map_err(|e| JukeboxError::Http(e.to_string()))?;
        let request = Request::new(Method::Get, parsed_url);

        let body = fetch_body(self.client.as_ref(), request, self.timeout).await?;
        parse_itunes_search_response(&body, fallback_year)
    }
}

#[derive(Deserialize)]
struct ItunesSearchResponse {
    #[serde(default)]
    results: Vec<ItunesSong>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItunesSong {
    track_name: Option<String>,
    artist_name: Option<String>,
    collection_name: Option<String>,
    release_date: Option<String>,
    artwork_url100: Option<String>,
    preview_url: Option<String>,
    track_view_url: Option<String>,
}

/// Map an iTunes search response body into normalized tracks.
///
/// Records missing a track name or artist are dropped. The API only hands
/// out 100x100 artwork; the URL carries the size inline, so it is rewritten
/// to request the target resolution.
pub(crate) fn parse_itunes_search_response(json: &str, fallback_year: i32) -> Result<Vec<Track>> {
    let response: ItunesSearchResponse =
        serde_json::from_str(json).map_err(|e| JukeboxError::Parse(e.to_string()))?;

    let tracks = response
        .results
        .into_iter()
        .filter_map(|song| {
            let title = song.track_name.filter(|name| !name.is_empty())?;
            let artist = song.artist_name.filter(|name| !name.is_empty())?;
            let track = Track {
                title,
                artist,
                album: song.collection_name,
                year: parse_release_year(song.release_date.as_deref(), fallback_year),
                cover_url: artwork_url(song.artwork_url100.as_deref()),
                preview_url: song.preview_url.unwrap_or_default(),
                source_url: song.track_view_url,
            };
            Some(track.normalized(fallback_year))
        })
        .collect();

    Ok(tracks)
}

/// Rewrite the `{n}x{n}bb` size segment of an iTunes artwork URL, falling
/// back to a bare `{n}x{n}` match for older URL shapes.
fn artwork_url(url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };

    let sized = format!("{ARTWORK_SIZE}x{ARTWORK_SIZE}");
    let with_bb = regex::Regex::new(r"(?i)(\d+)x(\d+)bb")
        .unwrap()
        .replace(url, format!("{sized}bb").as_str());
    if with_bb != url {
        return with_bb.into_owned();
    }

    regex::Regex::new(r"(?i)(\d+)x(\d+)")
        .unwrap()
        .replace(url, sized.as_str())
        .into_owned()
}
