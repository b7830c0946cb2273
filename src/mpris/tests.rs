use super::*;
use std::sync::mpsc;

fn make_track() -> Track {
    Track {
        name: "test".to_string(),
        display_name: "Test Title".to_string(),
        artist: "Test Artist".to_string(),
        src: "/tmp/music/test.mp3".to_string(),
        cover: "https://example.org/cover.jpg".to_string(),
    }
}

fn handle_with_state() -> (MprisHandle, Arc<Mutex<SharedState>>, Receiver<()>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, notify_rx) = mpsc::channel::<()>();
    let handle = MprisHandle {
        state: state.clone(),
        notify: notify_tx,
    };
    (handle, state, notify_rx)
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let (handle, state, notify_rx) = handle_with_state();

    let track = make_track();
    handle.set_track_metadata(Some(7), Some(&track));

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert_eq!(s.url.as_deref(), Some("file:///tmp/music/test.mp3"));
        assert_eq!(s.art_url.as_deref(), Some("https://example.org/cover.jpg"));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/7")
        );
    }
    assert!(notify_rx.try_recv().is_ok());

    handle.set_track_metadata(None, None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.url, None);
        assert_eq!(s.art_url, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn blank_artist_and_cover_are_omitted() {
    let (handle, state, _rx) = handle_with_state();
    let track = Track {
        artist: String::new(),
        cover: " ".to_string(),
        ..make_track()
    };
    handle.set_track_metadata(Some(0), Some(&track));

    let s = state.lock().unwrap();
    assert!(s.artist.is_empty());
    assert_eq!(s.art_url, None);
}

#[test]
fn playback_status_maps_state_to_mpris_strings() {
    let (handle, state, _rx) = handle_with_state();
    let (tx, _cmd_rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };

    assert_eq!(iface.playback_status(), "Stopped");

    handle.set_track_metadata(Some(0), Some(&make_track()));
    assert_eq!(iface.playback_status(), "Paused");

    handle.set_playback(true);
    assert_eq!(iface.playback_status(), "Playing");

    handle.set_playback(false);
    assert_eq!(iface.playback_status(), "Paused");
}

#[test]
fn player_methods_forward_control_commands() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    iface.play_pause();
    iface.next();
    iface.previous();
    iface.stop();

    let got: Vec<ControlCmd> = rx.try_iter().collect();
    assert_eq!(
        got,
        vec![
            ControlCmd::PlayPause,
            ControlCmd::Next,
            ControlCmd::Prev,
            ControlCmd::Stop
        ]
    );
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let (handle, state, _rx) = handle_with_state();
    let (tx, _cmd_rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    handle.set_track_metadata(Some(1), Some(&make_track()));

    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "xesam:url",
        "mpris:artUrl",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}
