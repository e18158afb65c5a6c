use async_trait::async_trait;
use birthday_jukebox::{JukeboxError, Result, Track, TrackResolver, TrackSource};
use std::cell::RefCell;
use std::rc::Rc;

fn candidate(title: &str, preview: &str) -> Track {
    Track {
        title: title.to_string(),
        artist: "Stub Artist".to_string(),
        album: None,
        year: 1985,
        cover_url: "https://example.com/cover.jpg".to_string(),
        preview_url: preview.to_string(),
        source_url: None,
    }
}

/// Records the terms a source was probed with, shared across the resolver
/// boundary so tests can inspect it after `resolve` returns.
#[derive(Default, Clone)]
struct CallLog {
    terms: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    fn record(&self, term: &str) {
        self.terms.borrow_mut().push(term.to_string());
    }

    fn count(&self) -> usize {
        self.terms.borrow().len()
    }

    fn terms(&self) -> Vec<String> {
        self.terms.borrow().clone()
    }
}

struct FailingSource {
    log: CallLog,
}

#[async_trait(?Send)]
impl TrackSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn search(&self, term: &str, _fallback_year: i32) -> Result<Vec<Track>> {
        self.log.record(term);
        Err(JukeboxError::Http("connection refused".to_string()))
    }
}

struct EmptySource {
    log: CallLog,
}

#[async_trait(?Send)]
impl TrackSource for EmptySource {
    fn name(&self) -> &'static str {
        "empty"
    }

    async fn search(&self, term: &str, _fallback_year: i32) -> Result<Vec<Track>> {
        self.log.record(term);
        Ok(Vec::new())
    }
}

/// Returns no results until the nth call, then yields a fixed candidate set.
struct ScriptedSource {
    log: CallLog,
    succeed_on_call: usize,
    results: Vec<Track>,
}

#[async_trait(?Send)]
impl TrackSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn search(&self, term: &str, _fallback_year: i32) -> Result<Vec<Track>> {
        self.log.record(term);
        if self.log.count() == self.succeed_on_call {
            Ok(self.results.clone())
        } else {
            Ok(Vec::new())
        }
    }
}

struct PanickingSource;

#[async_trait(?Send)]
impl TrackSource for PanickingSource {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn search(&self, term: &str, _fallback_year: i32) -> Result<Vec<Track>> {
        panic!("a lower-priority source was probed unnecessarily (term {term:?})");
    }
}

#[test_log::test(tokio::test)]
async fn secondary_source_result_prefers_the_preview_candidate() {
    let primary_log = CallLog::default();
    let secondary_log = CallLog::default();

    let primary = FailingSource {
        log: primary_log.clone(),
    };
    let secondary = ScriptedSource {
        log: secondary_log.clone(),
        succeed_on_call: 3,
        results: vec![
            candidate("muted", ""),
            candidate("audible", "https://example.com/p.m4a"),
        ],
    };

    let resolver = TrackResolver::new(vec![Box::new(primary), Box::new(secondary)]);
    let track = resolver.resolve(1985).await;

    // The single preview-bearing candidate must win deterministically.
    assert_eq!(track.title, "audible");

    // The primary burned through every term; the secondary stopped at its
    // first non-empty result.
    assert_eq!(primary_log.count(), 6);
    assert_eq!(
        secondary_log.terms(),
        vec!["1985 80s hit", "1985 pop song", "1985 new wave"]
    );
}

#[tokio::test]
async fn exhausted_sources_fall_back_to_the_builtin_catalog() {
    let primary_log = CallLog::default();
    let secondary_log = CallLog::default();

    let resolver = TrackResolver::new(vec![
        Box::new(EmptySource {
            log: primary_log.clone(),
        }),
        Box::new(FailingSource {
            log: secondary_log.clone(),
        }),
    ]);
    let track = resolver.resolve(1986).await;

    assert_eq!(track.year, 1986);
    assert_eq!(track.title, "Red Room FM");
    assert!(!track.cover_url.is_empty());
    assert_eq!(primary_log.count(), 6);
    assert_eq!(secondary_log.count(), 6);
}

#[tokio::test]
async fn first_source_success_short_circuits_the_cascade() {
    let log = CallLog::default();
    let primary = ScriptedSource {
        log: log.clone(),
        succeed_on_call: 1,
        results: vec![candidate("instant hit", "https://example.com/p.m4a")],
    };

    let resolver = TrackResolver::new(vec![Box::new(primary), Box::new(PanickingSource)]);
    let track = resolver.resolve(1985).await;

    assert_eq!(track.title, "instant hit");
    assert_eq!(log.count(), 1);
}

#[tokio::test]
async fn target_year_is_clamped_before_searching() {
    let log = CallLog::default();
    let resolver = TrackResolver::new(vec![Box::new(EmptySource { log: log.clone() })]);

    let track = resolver.resolve(2021).await;

    assert_eq!(track.year, 1989);
    assert!(log.terms().iter().all(|term| term.starts_with("1989 ")));
}
