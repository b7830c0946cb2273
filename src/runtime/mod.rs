use std::env;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog;
use crate::controller::{NowPlayingView, PlaybackController, PlayerEvent};
use crate::media::AudioElement;
use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = settings_warning {
        log::warn!("{msg}");
    }

    // With nothing configured, scan the working directory.
    let dir = env::args().nth(1).map(PathBuf::from).or_else(|| {
        if settings.catalog.tracks.is_empty() && settings.catalog.dir.is_none() {
            env::current_dir().ok()
        } else {
            None
        }
    });
    let tracks = catalog::load(&settings.catalog, dir.as_deref());

    let (media, media_rx) = AudioElement::new(settings.audio.clone());
    let mut controller = PlaybackController::new(tracks, media, NowPlayingView::default())?;
    let mut app = App::new(controller.tracks().len());

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::attach_mpris(&mut controller, &mpris);

    let (player_tx, player_rx) = mpsc::channel::<PlayerEvent>();
    controller.subscribe(Box::new(move |event: &PlayerEvent| {
        let _ = player_tx.send(event.clone());
    }));

    controller.set_volume(settings.audio.volume);
    controller.load_track();
    controller.build_playlist();
    log::info!(
        "playdeck: {} tracks, starting at {:?}",
        controller.tracks().len(),
        controller.current_track().display_name
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        let inbox = event_loop::Inbox {
            media: &media_rx,
            player: &player_rx,
            control: &control_rx,
            control_tx: &control_tx,
        };

        event_loop::run(
            &mut terminal,
            &settings,
            &mut controller,
            &mut app,
            inbox,
            &mut state,
        )
    })();

    controller.cancel_probes();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    run_result
}
