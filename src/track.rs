use serde::{Deserialize, Serialize};

/// First year of the supported era.
pub const ERA_FIRST_YEAR: i32 = 1980;
/// Last year of the supported era.
pub const ERA_LAST_YEAR: i32 = 1989;

/// A normalized music track.
///
/// This is the only entity the crate produces. Tracks are plain immutable
/// values: they are constructed once inside search-response mapping (or
/// selected from the built-in fallback catalog) and never mutated afterwards.
///
/// Invariants, enforced by [`Track::normalized`]:
/// - `year` always lies in `[1980, 1989]`, regardless of source data
/// - `cover_url` is never empty (a generated placeholder is substituted)
/// - an empty `preview_url` means "no audio preview available"
///
/// # Examples
///
/// ```rust
/// use birthday_jukebox::Track;
///
/// let track = Track {
///     title: "Analog Pulse".to_string(),
///     artist: "Night Operator".to_string(),
///     album: None,
///     year: 1985,
///     cover_url: "https://example.com/cover.jpg".to_string(),
///     preview_url: String::new(),
///     source_url: None,
/// };
///
/// println!("{} by {} ({})", track.title, track.artist, track.year);
/// assert!(!track.has_preview());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// The track title
    pub title: String,
    /// The artist name
    pub artist: String,
    /// The album name (if the catalog reported one)
    pub album: Option<String>,
    /// Release year, clamped into the supported era
    pub year: i32,
    /// Cover artwork URL; never empty after normalization
    pub cover_url: String,
    /// Audio preview URL; empty when no preview is available
    pub preview_url: String,
    /// Deep link to the source catalog entry (if available)
    pub source_url: Option<String>,
}

impl Track {
    /// Whether this track carries an audio preview.
    pub fn has_preview(&self) -> bool {
        !self.preview_url.is_empty()
    }

    /// Enforce the track invariants, substituting `fallback_year` and a
    /// generated placeholder cover where the source data came up short.
    ///
    /// A zero year (the "field absent" marker used during mapping) is
    /// replaced by `fallback_year` before clamping.
    pub fn normalized(mut self, fallback_year: i32) -> Track {
        if self.year == 0 {
            self.year = fallback_year;
        }
        self.year = clamp_year_to_eighties(self.year);
        if self.cover_url.is_empty() {
            self.cover_url =
                crate::catalog::build_fallback_cover(&self.title, &self.artist, self.year);
        }
        self
    }
}

/// Clamp any year into the supported `[1980, 1989]` range.
///
/// Total function: no error condition, idempotent. Used both to derive a
/// target era year from a birthdate and to sanitize year values returned by
/// the catalogs.
pub fn clamp_year_to_eighties(year: i32) -> i32 {
    year.clamp(ERA_FIRST_YEAR, ERA_LAST_YEAR)
}

/// Extract a release year from a catalog date string like `"1985-06-07"`.
///
/// The first four characters must parse as an integer; otherwise the
/// supplied fallback year is used. The result is always clamped.
pub(crate) fn parse_release_year(release_date: Option<&str>, fallback_year: i32) -> i32 {
    let parsed = release_date
        .and_then(|date| date.get(..4))
        .and_then(|prefix| prefix.parse::<i32>().ok());
    clamp_year_to_eighties(parsed.unwrap_or(fallback_year))
}
