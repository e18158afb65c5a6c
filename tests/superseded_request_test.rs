use birthday_jukebox::{pick_fallback_track_for_year, LatestTrackSlot};
use std::time::Duration;

#[tokio::test]
async fn newer_request_wins_when_the_older_one_finishes_last() {
    let slot = LatestTrackSlot::new();

    let gen_a = slot.begin();
    let slow = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        slot.publish(gen_a, pick_fallback_track_for_year(1980))
    };

    let gen_b = slot.begin();
    let fast = async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        slot.publish(gen_b, pick_fallback_track_for_year(1989))
    };

    let (a_accepted, b_accepted) = tokio::join!(slow, fast);
    assert!(!a_accepted);
    assert!(b_accepted);

    let latest = slot.latest().unwrap();
    assert_eq!(latest.generation, gen_b);
    assert_eq!(latest.track.year, 1989);
}

#[tokio::test]
async fn newer_request_wins_even_when_the_older_one_finishes_first() {
    let slot = LatestTrackSlot::new();

    let gen_a = slot.begin();
    let fast_but_stale = async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        slot.publish(gen_a, pick_fallback_track_for_year(1980))
    };

    let gen_b = slot.begin();
    let slow_but_current = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        slot.publish(gen_b, pick_fallback_track_for_year(1989))
    };

    let (a_accepted, b_accepted) = tokio::join!(fast_but_stale, slow_but_current);
    assert!(!a_accepted);
    assert!(b_accepted);

    let latest = slot.latest().unwrap();
    assert_eq!(latest.generation, gen_b);
    assert_eq!(latest.track.year, 1989);
}
