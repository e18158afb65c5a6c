use crate::catalog::pick_fallback_track_for_year;
use crate::config::JukeboxConfig;
use crate::source::TrackSource;
use crate::terms::build_search_terms;
use crate::track::{clamp_year_to_eighties, Track};
use crate::{AppleMusicSource, ItunesSource};
use chrono::Datelike;
use http_client::HttpClient;
use rand::Rng;
use std::sync::Arc;

/// Drives catalog sources in priority order and guarantees a track.
///
/// Resolution cascades through each source's six probe terms, moving to the
/// next source once a source is exhausted, and finally falling back to the
/// built-in catalog. [`TrackResolver::resolve`] therefore never fails.
///
/// # Examples
///
/// ```rust,no_run
/// use birthday_jukebox::{JukeboxConfig, TrackResolver};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let http_client = http_client::native::NativeClient::new();
/// let resolver = TrackResolver::from_config(Arc::new(http_client), &JukeboxConfig::from_env());
///
/// let track = resolver.resolve(1984).await;
/// println!("{} by {} ({})", track.title, track.artist, track.year);
/// # });
/// ```
pub struct TrackResolver {
    sources: Vec<Box<dyn TrackSource>>,
}

impl TrackResolver {
    /// Build a resolver over an explicit source priority list.
    ///
    /// Sources are tried in the order given.
    pub fn new(sources: Vec<Box<dyn TrackSource>>) -> Self {
        Self { sources }
    }

    /// Build the standard two-source resolver: Apple Music first, the public
    /// iTunes Search API second.
    pub fn from_config(client: Arc<dyn HttpClient + Send + Sync>, config: &JukeboxConfig) -> Self {
        Self::new(vec![
            Box::new(AppleMusicSource::new(client.clone(), config)),
            Box::new(ItunesSource::new(client, config)),
        ])
    }

    /// Resolve a track for a target year. Never fails.
    ///
    /// The year is clamped into the supported era before searching. Each
    /// source is probed with the term sequence for the year; timeouts,
    /// transport errors, and empty result sets all just advance the cascade.
    /// When a source yields candidates, one is picked at random, preferring
    /// candidates that carry an audio preview.
    pub async fn resolve(&self, year: i32) -> Track {
        let year = clamp_year_to_eighties(year);
        let terms = build_search_terms(year);

        for source in &self.sources {
            let candidates = search_with_terms(source.as_ref(), year, &terms).await;
            if let Some(track) = pick_candidate(candidates) {
                log::info!(
                    "resolved {year} to '{}' by '{}' via {}",
                    track.title,
                    track.artist,
                    source.name()
                );
                return track;
            }
        }

        log::info!("all catalog sources exhausted for {year}, using the built-in fallback");
        pick_fallback_track_for_year(year)
    }

    /// Resolve a track for a birthdate, clamping its year into the era.
    pub async fn resolve_for_birthdate(&self, birthdate: chrono::NaiveDate) -> Track {
        self.resolve(birthdate.year()).await
    }
}

/// Probe a single source with each term in order, stopping at the first
/// non-empty result set. A failed term is never retried.
async fn search_with_terms(
    source: &dyn TrackSource,
    fallback_year: i32,
    terms: &[String],
) -> Vec<Track> {
    for term in terms {
        match source.search(term, fallback_year).await {
            Ok(tracks) if !tracks.is_empty() => {
                log::debug!("{}: {} candidates for {term:?}", source.name(), tracks.len());
                return tracks;
            }
            Ok(_) => log::debug!("{}: no results for {term:?}", source.name()),
            Err(e) => log::debug!("{}: {term:?} failed: {e}", source.name()),
        }
    }
    Vec::new()
}

/// Pick one candidate, preferring those with an audio preview. Uniformly
/// random within the chosen pool.
fn pick_candidate(candidates: Vec<Track>) -> Option<Track> {
    if candidates.is_empty() {
        return None;
    }

    let with_preview: Vec<Track> = candidates
        .iter()
        .filter(|track| track.has_preview())
        .cloned()
        .collect();
    let mut pool = if with_preview.is_empty() {
        candidates
    } else {
        with_preview
    };

    let index = rand::rng().random_range(0..pool.len());
    Some(pool.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, preview: &str) -> Track {
        Track {
            title: title.to_string(),
            artist: "Artist".to_string(),
            album: None,
            year: 1985,
            cover_url: "https://example.com/cover.jpg".to_string(),
            preview_url: preview.to_string(),
            source_url: None,
        }
    }

    #[test]
    fn empty_candidate_set_picks_nothing() {
        assert_eq!(pick_candidate(Vec::new()), None);
    }

    #[test]
    fn single_preview_candidate_wins_deterministically() {
        let candidates = vec![
            track("muted", ""),
            track("audible", "https://example.com/p.m4a"),
            track("also muted", ""),
        ];
        let picked = pick_candidate(candidates).unwrap();
        assert_eq!(picked.title, "audible");
    }

    #[test]
    fn previewless_pool_still_yields_a_candidate() {
        let candidates = vec![track("a", ""), track("b", "")];
        let picked = pick_candidate(candidates).unwrap();
        assert!(picked.title == "a" || picked.title == "b");
    }
}
