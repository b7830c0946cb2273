use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::controller::{PlaybackController, PlayerEvent};
use crate::media::{AudioElement, MediaElement, MediaEvent};
use crate::mpris::ControlCmd;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Regions of the last drawn frame, for mouse hit-testing.
    pub areas: Option<ui::Areas>,
}

/// Channels the loop drains every iteration.
pub struct Inbox<'a> {
    pub media: &'a mpsc::Receiver<MediaEvent>,
    pub player: &'a mpsc::Receiver<PlayerEvent>,
    pub control: &'a mpsc::Receiver<ControlCmd>,
    pub control_tx: &'a mpsc::Sender<ControlCmd>,
}

/// Main terminal event loop: applies media notifications and probe results,
/// draws, and dispatches input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut PlaybackController<AudioElement>,
    app: &mut App,
    inbox: Inbox<'_>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Ok(ev) = inbox.media.try_recv() {
            controller.handle_media_event(ev);
        }
        controller.poll_probes();

        while let Ok(ev) = inbox.player.try_recv() {
            if let PlayerEvent::TrackChanged { index } = ev {
                app.on_track_changed(index);
            }
        }

        terminal.draw(|f| {
            state.areas = Some(ui::layout(f.area(), &settings.ui));
            ui::draw(
                f,
                controller.surface(),
                app,
                &settings.ui,
                &settings.controls,
            )
        })?;

        while let Ok(cmd) = inbox.control.try_recv() {
            if handle_control_cmd(cmd, controller, app) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, controller, app, inbox.control_tx, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, controller, app, state),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Apply one transport request. Returns `true` on quit.
pub fn handle_control_cmd<M: MediaElement>(
    cmd: ControlCmd,
    controller: &mut PlaybackController<M>,
    app: &mut App,
) -> bool {
    log::debug!("control: {cmd:?}");
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if !controller.is_playing() {
                controller.play();
            }
        }
        ControlCmd::Pause | ControlCmd::Stop => {
            if controller.is_playing() {
                controller.pause();
            }
        }
        ControlCmd::PlayPause => controller.toggle(),
        ControlCmd::Next => {
            app.follow_playback_on();
            controller.next();
        }
        ControlCmd::Prev => {
            app.follow_playback_on();
            controller.previous();
        }
    }
    false
}

/// Dispatch a key press. Returns `true` on quit.
pub fn handle_key_event<M: MediaElement>(
    key: KeyEvent,
    settings: &config::Settings,
    controller: &mut PlaybackController<M>,
    app: &mut App,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('L') => controller.seek_by(settings.controls.scrub_seconds as f64),
        KeyCode::Char('H') => controller.seek_by(-(settings.controls.scrub_seconds as f64)),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            controller.step_volume(settings.controls.volume_step);
        }
        KeyCode::Char('-') => controller.step_volume(-settings.controls.volume_step),
        KeyCode::Char('j') | KeyCode::Down => {
            app.follow_playback_off();
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.follow_playback_off();
            app.prev();
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.follow_playback_off();
                app.first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            app.follow_playback_off();
            app.last();
        }
        KeyCode::Enter => {
            let is_playing_selected =
                controller.is_playing() && controller.track_index() == app.selected;
            if !is_playing_selected {
                app.follow_playback_on();
                controller.select_track(app.selected);
            }
        }
        _ => {}
    }

    false
}

/// Left clicks seek on the progress bar and select on the playlist.
pub fn handle_mouse_event<M: MediaElement>(
    mouse: MouseEvent,
    controller: &mut PlaybackController<M>,
    app: &mut App,
    state: &EventLoopState,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(areas) = state.areas else {
        return;
    };

    if let Some(fraction) = ui::seek_fraction(areas.progress, mouse.column, mouse.row) {
        controller.seek(fraction);
        return;
    }

    if let Some(idx) = ui::row_at(
        areas.playlist,
        mouse.column,
        mouse.row,
        controller.tracks().len(),
        app.selected,
    ) {
        app.follow_playback_on();
        app.set_selected(idx);
        controller.select_track(idx);
    }
}

#[cfg(test)]
mod tests;
