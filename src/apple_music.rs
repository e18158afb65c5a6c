//! Apple Music catalog source (primary, authenticated).

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

const APPLE_MUSIC_ENDPOINT: &str = "https://api.music.apple.com/v1/catalog";

/// Search client for the Apple Music catalog.
///
/// Requires a developer token; when none is configured the source is a
/// no-op that reports zero candidates, so the resolution pipeline falls
/// through to the next source without treating this as a failure.
pub struct AppleMusicSource {
    client: Arc<dyn HttpClient + Send + Sync>,
    developer_token: Option<String>,
    storefront: String,
    endpoint: String,
    timeout: Duration,
}

impl AppleMusicSource {
    /// Create a source against the production Apple Music endpoint.
    pub fn new(client: Arc<dyn HttpClient + Send + Sync>, config: &JukeboxConfig) -> Self {
        Self::with_endpoint(client, config, APPLE_MUSIC_ENDPOINT.to_string())
    }

    /// Create a source against a custom endpoint. Useful for testing.
    pub fn with_endpoint(
        client: Arc<dyn HttpClient + Send + Sync>,
        config: &JukeboxConfig,
        endpoint: String,
    ) -> Self {
        Self {
            client,
            developer_token: config.developer_token.clone(),
            storefront: config.storefront.clone(),
            endpoint,
            timeout: config.request_timeout(),
        }
    }
}

#[async_trait(?Send)]
impl TrackSource for AppleMusicSource {
    fn name(&self) -> &'static str {
        "apple-music"
    }

    async fn search(&self, term: &str, fallback_year: i32) -> Result<Vec<Track>> {
        let Some(token) = &self.developer_token else {
            log::debug!("apple-music: no developer token configured, skipping");
            return Ok(Vec::new());
        };

        let url = format!(
            "{}/{}/search?term={}&types=songs&limit=25",
            self.endpoint,
            self.storefront,
            urlencoding::encode(term)
        );
        let parsed_url = url
            .parse::<Url>()
            .map_err(|e| JukeboxError::Http(e.to_string()))?;
        let mut request = Request::new(Method::Get, parsed_url);
        request.insert_header("Authorization", format!("Bearer {token}").as_str());

        let body = fetch_body(self.client.as_ref(), request, self.timeout).await?;
        parse_apple_search_response(&body, fallback_year)
    }
}

#[derive(Deserialize)]
struct AppleSearchResponse {
    results: Option<AppleResults>,
}

#[derive(Deserialize)]
struct AppleResults {
    songs: Option<AppleSongList>,
}

#[derive(Deserialize)]
struct AppleSongList {
    #[serde(default)]
    data: Vec<AppleSong>,
}

#[derive(Deserialize)]
struct AppleSong {
    attributes: Option<AppleAttributes>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppleAttributes {
    name: Option<String>,
    artist_name: Option<String>,
    album_name: Option<String>,
    release_date: Option<String>,
    artwork: Option<AppleArtwork>,
    #[serde(default)]
    previews: Vec<ApplePreview>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct AppleArtwork {
    url: Option<String>,
}

#[derive(Deserialize)]
struct ApplePreview {
    url: Option<String>,
}

/// Map an Apple Music search response body into normalized tracks.
///
/// Records missing a name or artist are dropped. Artwork URLs use a
/// `{w}x{h}` template that is substituted for the target resolution.
pub(crate) fn parse_apple_search_response(json: &str, fallback_year: i32) -> Result<Vec<Track>> {
    let response: AppleSearchResponse =
        serde_json::from_str(json).map_err(|e| JukeboxError::Parse(e.to_string()))?;

    let songs = response
        .results
        .and_then(|results| results.songs)
        .map(|songs| songs.data)
        .unwrap_or_default();

    let tracks = songs
        .into_iter()
        .filter_map(|song| {
            let attributes = song.attributes?;
            let title = attributes.name.filter(|name| !name.is_empty())?;
            let artist = attributes.artist_name.filter(|name| !name.is_empty())?;
            let track = Track {
                title,
                artist,
                album: attributes.album_name,
                year: parse_release_year(attributes.release_date.as_deref(), fallback_year),
                cover_url: artwork_url(
                    attributes
                        .artwork
                        .and_then(|artwork| artwork.url)
                        .as_deref(),
                ),
                preview_url: attributes
                    .previews
                    .into_iter()
                    .next()
                    .and_then(|preview| preview.url)
                    .unwrap_or_default(),
                source_url: attributes.url,
            };
            Some(track.normalized(fallback_year))
        })
        .collect();

    Ok(tracks)
}

fn artwork_url(url: Option<&str>) -> String {
    match url {
        Some(url) => url
            .replace("{w}", &ARTWORK_SIZE.to_string())
            .replace("{h}", &ARTWORK_SIZE.to_string()),
        None => String::new(),
    }
}
