use crate::track::Track;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Last-request-wins bookkeeping for UI-driven lookups.
///
/// This is intentionally simple:
/// - `begin()` hands out a new monotonically increasing generation.
/// - `publish()` only accepts a result carrying the latest generation;
///   anything older is discarded.
/// - `subscribe()` exposes a watch channel so a display layer can react to
///   the latest accepted result.
///
/// In-flight lookups are never aborted here; a superseded request simply has
/// its eventual result ignored. The counter is only read-then-incremented by
/// the resolver's caller, never by the catalog sources.
#[derive(Debug)]
pub struct LatestTrackSlot {
    next_generation: AtomicU64,
    tx: watch::Sender<Option<ResolvedTrack>>,
}

/// A resolved track tagged with the request generation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrack {
    /// Generation handed out by [`LatestTrackSlot::begin`]
    pub generation: u64,
    /// The resolved track
    pub track: Track,
}

impl Default for LatestTrackSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl LatestTrackSlot {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            next_generation: AtomicU64::new(0),
            tx,
        }
    }

    /// Start a new request, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the latest request.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.next_generation.load(Ordering::SeqCst)
    }

    /// Store a result if its request has not been superseded.
    ///
    /// Returns `false` (and leaves the slot untouched) for stale results.
    pub fn publish(&self, generation: u64, track: Track) -> bool {
        if !self.is_current(generation) {
            log::debug!("discarding stale result for superseded request {generation}");
            return false;
        }
        let _ = self.tx.send(Some(ResolvedTrack { generation, track }));
        true
    }

    /// The latest accepted result, if any request has completed yet.
    pub fn latest(&self) -> Option<ResolvedTrack> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ResolvedTrack>> {
        self.tx.subscribe()
    }
}
