pub mod apple_music;
pub mod catalog;
pub mod config;
pub mod error;
pub mod itunes;
pub mod latest;
pub mod resolver;
pub mod source;
pub mod terms;
pub mod track;

pub use apple_music::AppleMusicSource;
pub use catalog::{build_fallback_cover, fallback_tracks, pick_fallback_track_for_year};
pub use config::JukeboxConfig;
pub use error::JukeboxError;
pub use itunes::ItunesSource;
pub use latest::{LatestTrackSlot, ResolvedTrack};
pub use resolver::TrackResolver;
pub use source::TrackSource;
pub use terms::build_search_terms;
pub use track::{clamp_year_to_eighties, Track, ERA_FIRST_YEAR, ERA_LAST_YEAR};

#[cfg(feature = "mock")]
pub use source::MockTrackSource;

pub type Result<T> = std::result::Result<T, JukeboxError>;
