use super::*;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseEvent};
use ratatui::layout::Rect;

use crate::catalog::Track;

#[derive(Default)]
struct StubMedia {
    time: f64,
    duration: Option<f64>,
}

impl MediaElement for StubMedia {
    fn set_source(&mut self, _src: &str) {
        self.time = 0.0;
    }
    fn generation(&self) -> u64 {
        0
    }
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn current_time(&self) -> f64 {
        self.time
    }
    fn set_current_time(&mut self, secs: f64) {
        self.time = secs;
    }
    fn duration(&self) -> Option<f64> {
        self.duration
    }
    fn set_volume(&mut self, _level: f32) {}
}

fn tracks(n: usize) -> Vec<Track> {
    (0..n)
        .map(|i| Track {
            name: format!("t{i}"),
            display_name: format!("Track {i}"),
            artist: String::new(),
            src: format!("/music/{i}.mp3"),
            cover: String::new(),
        })
        .collect()
}

fn setup(n: usize, duration: Option<f64>) -> (PlaybackController<StubMedia>, App) {
    let media = StubMedia {
        time: 0.0,
        duration,
    };
    let mut c = PlaybackController::new(tracks(n), media, Default::default())
        .unwrap()
        .with_prober(Arc::new(|_: &str| -> Option<Duration> { None }));
    c.load_track();
    c.build_playlist();
    (c, App::new(n))
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn control_commands_drive_transport() {
    let (mut c, mut app) = setup(3, None);

    assert!(!handle_control_cmd(ControlCmd::PlayPause, &mut c, &mut app));
    assert!(c.is_playing());
    handle_control_cmd(ControlCmd::Stop, &mut c, &mut app);
    assert!(!c.is_playing());
    handle_control_cmd(ControlCmd::Prev, &mut c, &mut app);
    assert_eq!(c.track_index(), 2);
    assert!(c.is_playing());
    handle_control_cmd(ControlCmd::Next, &mut c, &mut app);
    assert_eq!(c.track_index(), 0);
    assert!(handle_control_cmd(ControlCmd::Quit, &mut c, &mut app));
}

#[test]
fn transport_keys_go_through_control_channel() {
    let (mut c, mut app) = setup(3, None);
    let settings = config::Settings::default();
    let (tx, rx) = mpsc::channel();
    let mut state = EventLoopState::default();

    for ch in [' ', 'l', 'h'] {
        assert!(!handle_key_event(key(ch), &settings, &mut c, &mut app, &tx, &mut state));
    }
    let cmds: Vec<ControlCmd> = rx.try_iter().collect();
    assert_eq!(
        cmds,
        vec![ControlCmd::PlayPause, ControlCmd::Next, ControlCmd::Prev]
    );
    assert!(handle_key_event(key('q'), &settings, &mut c, &mut app, &tx, &mut state));
}

#[test]
fn cursor_keys_and_enter_select_track() {
    let (mut c, mut app) = setup(4, None);
    let settings = config::Settings::default();
    let (tx, _rx) = mpsc::channel();
    let mut state = EventLoopState::default();

    handle_key_event(key('j'), &settings, &mut c, &mut app, &tx, &mut state);
    handle_key_event(key('j'), &settings, &mut c, &mut app, &tx, &mut state);
    assert_eq!(app.selected, 2);
    assert!(!app.follow_playback);
    assert_eq!(c.track_index(), 0);

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    handle_key_event(enter, &settings, &mut c, &mut app, &tx, &mut state);
    assert_eq!(c.track_index(), 2);
    assert!(c.is_playing());
    assert!(app.follow_playback);
    assert_eq!(c.surface().active_row(), Some(2));

    handle_key_event(key('G'), &settings, &mut c, &mut app, &tx, &mut state);
    assert_eq!(app.selected, 3);
    handle_key_event(key('g'), &settings, &mut c, &mut app, &tx, &mut state);
    assert_eq!(app.selected, 3);
    handle_key_event(key('g'), &settings, &mut c, &mut app, &tx, &mut state);
    assert_eq!(app.selected, 0);
}

#[test]
fn scrub_and_volume_keys_use_configured_steps() {
    let (mut c, mut app) = setup(1, Some(100.0));
    let mut settings = config::Settings::default();
    settings.controls.scrub_seconds = 10;
    settings.controls.volume_step = 0.25;
    let (tx, _rx) = mpsc::channel();
    let mut state = EventLoopState::default();

    handle_key_event(key('L'), &settings, &mut c, &mut app, &tx, &mut state);
    handle_key_event(key('L'), &settings, &mut c, &mut app, &tx, &mut state);
    assert!((c.media().current_time() - 20.0).abs() < 1e-9);
    handle_key_event(key('H'), &settings, &mut c, &mut app, &tx, &mut state);
    assert!((c.media().current_time() - 10.0).abs() < 1e-9);

    handle_key_event(key('-'), &settings, &mut c, &mut app, &tx, &mut state);
    assert!((c.volume() - 0.75).abs() < 1e-6);
    handle_key_event(key('+'), &settings, &mut c, &mut app, &tx, &mut state);
    handle_key_event(key('+'), &settings, &mut c, &mut app, &tx, &mut state);
    assert!((c.volume() - 1.0).abs() < 1e-6);
}

#[test]
fn clicks_seek_and_select_rows() {
    let (mut c, mut app) = setup(3, Some(200.0));
    let state = EventLoopState {
        pending_gg: false,
        areas: Some(ui::Areas {
            header: Rect::new(0, 0, 42, 3),
            now_playing: Rect::new(0, 3, 42, 5),
            progress: Rect::new(0, 8, 42, 3),
            volume: Rect::new(0, 11, 42, 3),
            playlist: Rect::new(0, 14, 42, 10),
            footer: Rect::new(0, 24, 42, 4),
        }),
    };

    // Inner bar spans columns 1..=40; column 21 is halfway.
    handle_mouse_event(click(21, 9), &mut c, &mut app, &state);
    assert!((c.media().current_time() - 100.0).abs() < 1e-9);

    // Rows start one line below the playlist border.
    handle_mouse_event(click(5, 16), &mut c, &mut app, &state);
    assert_eq!(c.track_index(), 1);
    assert_eq!(app.selected, 1);
    assert!(c.is_playing());

    // Below the last row: nothing happens.
    handle_mouse_event(click(5, 20), &mut c, &mut app, &state);
    assert_eq!(c.track_index(), 1);
}

#[test]
fn clicks_before_first_frame_are_ignored() {
    let (mut c, mut app) = setup(2, Some(10.0));
    let state = EventLoopState::default();
    handle_mouse_event(click(1, 1), &mut c, &mut app, &state);
    assert_eq!(c.track_index(), 0);
    assert!(!c.is_playing());
}
