use super::*;

#[test]
fn cursor_wraps_both_ways() {
    let mut app = App::new(3);
    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.next();
    app.next();
    assert_eq!(app.selected, 2);
}

#[test]
fn first_and_last_jump_to_edges() {
    let mut app = App::new(4);
    app.last();
    assert_eq!(app.selected, 3);
    app.first();
    assert_eq!(app.selected, 0);
}

#[test]
fn cursor_follows_playback_only_when_enabled() {
    let mut app = App::new(5);
    app.on_track_changed(3);
    assert_eq!(app.selected, 3);

    app.follow_playback_off();
    app.on_track_changed(1);
    assert_eq!(app.selected, 3);

    app.follow_playback_on();
    app.on_track_changed(1);
    assert_eq!(app.selected, 1);
}

#[test]
fn set_selected_ignores_out_of_range() {
    let mut app = App::new(2);
    app.set_selected(1);
    app.set_selected(9);
    assert_eq!(app.selected, 1);
}
