use std::fs;
use std::time::{Duration, Instant};

use tempfile::tempdir;

use super::MediaEvent;
use super::clock::{PlayClock, clamp_seek, tick_event};
use super::probe_duration;

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn clamp_seek_stops_at_known_duration() {
    let d = Some(secs(125));
    assert_eq!(clamp_seek(secs(65), d), secs(65));
    assert_eq!(clamp_seek(secs(400), d), secs(125));
    assert_eq!(clamp_seek(secs(400), None), secs(400));
}

#[test]
fn probe_duration_is_none_for_undecodable_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.mp3");
    fs::write(&path, b"definitely not audio").unwrap();

    assert_eq!(probe_duration(&path), None);
    assert_eq!(probe_duration(&dir.path().join("missing.mp3")), None);
}

#[test]
fn clock_accumulates_across_pause_and_resume() {
    let t0 = Instant::now();
    let mut clock = PlayClock::default();
    assert_eq!(clock.elapsed_at(t0), Duration::ZERO);

    clock.resume(t0);
    assert_eq!(clock.elapsed_at(t0 + secs(3)), secs(3));

    clock.pause(t0 + secs(3));
    assert!(!clock.is_running());
    // Paused time does not count.
    assert_eq!(clock.elapsed_at(t0 + secs(60)), secs(3));

    clock.resume(t0 + secs(60));
    assert_eq!(clock.elapsed_at(t0 + secs(62)), secs(5));

    // A second resume while running keeps the original start.
    clock.resume(t0 + secs(61));
    assert_eq!(clock.elapsed_at(t0 + secs(62)), secs(5));
}

#[test]
fn seeking_while_paused_stays_paused() {
    let t0 = Instant::now();
    let mut clock = PlayClock::default();
    clock.jump_to(secs(40), t0);

    assert!(!clock.is_running());
    assert_eq!(clock.elapsed_at(t0 + secs(10)), secs(40));
}

#[test]
fn seeking_while_running_restarts_from_target() {
    let t0 = Instant::now();
    let mut clock = PlayClock::default();
    clock.resume(t0);
    clock.jump_to(secs(90), t0 + secs(5));

    assert!(clock.is_running());
    assert_eq!(clock.elapsed_at(t0 + secs(7)), secs(92));
}

#[test]
fn tick_reports_progress_only_while_running() {
    let t0 = Instant::now();
    let mut clock = PlayClock::default();
    assert_eq!(tick_event(&mut clock, false, Some(secs(125)), 4, t0), None);

    clock.resume(t0);
    assert_eq!(
        tick_event(&mut clock, false, Some(secs(125)), 4, t0 + secs(65)),
        Some(MediaEvent::TimeUpdate {
            generation: 4,
            current_time: 65.0,
            duration: Some(125.0),
        })
    );
}

#[test]
fn drained_sink_ends_at_known_duration() {
    let t0 = Instant::now();
    let mut clock = PlayClock::default();
    clock.resume(t0);

    let event = tick_event(&mut clock, true, Some(secs(125)), 2, t0 + secs(126));
    assert_eq!(event, Some(MediaEvent::Ended { generation: 2 }));
    assert!(!clock.is_running());
    assert_eq!(clock.elapsed_at(t0 + secs(500)), secs(125));

    // Ended is reported once.
    assert_eq!(tick_event(&mut clock, true, Some(secs(125)), 2, t0 + secs(127)), None);
}

#[test]
fn drained_sink_without_duration_ends_where_it_got_to() {
    let t0 = Instant::now();
    let mut clock = PlayClock::default();
    clock.resume(t0);

    let event = tick_event(&mut clock, true, None, 1, t0 + secs(30));
    assert_eq!(event, Some(MediaEvent::Ended { generation: 1 }));
    assert_eq!(clock.elapsed_at(t0 + secs(40)), secs(30));
}

#[test]
fn events_report_their_generation() {
    assert_eq!(MediaEvent::Ended { generation: 9 }.generation(), 9);
    assert_eq!(
        MediaEvent::LoadedMetadata {
            generation: 3,
            duration: None
        }
        .generation(),
        3
    );
}
