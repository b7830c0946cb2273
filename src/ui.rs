//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the `NowPlayingView` with `ratatui` and maps mouse
//! positions back onto the seek bar and playlist rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::controller::{Affordance, NowPlayingView};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    map.insert("j/k", "up/down");
    map.insert("g/G", "top/bottom");
    map.insert("enter", "play selected song");
    map.insert("click", "seek / select");
    map.insert("q", "quit");
    // H/L and +/- are filled from config.
    map
});

/// Render the controls help text, incorporating scrub seconds and volume step.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "space/p", "h/l", "H/L", "+/-", "j/k", "g/G", "enter", "click", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "H/L" => Some(format!("[H/L] scrub -/+{}s", controls.scrub_seconds)),
            "+/-" => Some(format!(
                "[+/-] volume {}%",
                (controls.volume_step * 100.0).round()
            )),
            _ => CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub now_playing: Rect,
    pub progress: Rect,
    pub volume: Rect,
    pub playlist: Rect,
    pub footer: Rect,
}

/// Split the full terminal `area` into the player's regions.
pub fn layout(area: Rect, ui: &UiSettings) -> Areas {
    let now_playing_height = if ui.show_cover { 5 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(now_playing_height),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(area);
    Areas {
        header: chunks[0],
        now_playing: chunks[1],
        progress: chunks[2],
        volume: chunks[3],
        playlist: chunks[4],
        footer: chunks[5],
    }
}

/// The area inside a one-cell border.
fn inner(r: Rect) -> Rect {
    Rect {
        x: r.x.saturating_add(1),
        y: r.y.saturating_add(1),
        width: r.width.saturating_sub(2),
        height: r.height.saturating_sub(2),
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Normalized position of a click on the seek bar, or `None` outside it.
pub fn seek_fraction(progress: Rect, column: u16, row: u16) -> Option<f64> {
    let bar = inner(progress);
    if bar.width == 0 || !contains(bar, column, row) {
        return None;
    }
    Some(f64::from(column - bar.x) / f64::from(bar.width))
}

/// Visible slice `[start, end)` of `total` rows in `height` lines, keeping
/// `selected` centered when possible.
pub fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

/// Track index of the playlist row under a click, if any.
pub fn row_at(playlist: Rect, column: u16, row: u16, total: usize, selected: usize) -> Option<usize> {
    let list = inner(playlist);
    if !contains(list, column, row) {
        return None;
    }
    let (start, end) = visible_window(total, list.height as usize, selected);
    let idx = start + (row - list.y) as usize;
    (idx < end).then_some(idx)
}

/// Label of the play/pause control: the action it offers.
fn play_symbol(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::Play => "▶ play",
        Affordance::Pause => "⏸ pause",
    }
}

fn playlist_line(view: &NowPlayingView, idx: usize) -> Line<'_> {
    let row = &view.rows[idx];
    let marker = if row.active { "♪ " } else { "  " };
    let mut spans = vec![Span::raw(marker), Span::raw(row.title.as_str())];
    if !row.artist.trim().is_empty() {
        spans.push(Span::raw(" - ").dim());
        spans.push(Span::raw(row.artist.as_str()).italic());
    }
    if let Some(ref d) = row.duration {
        spans.push(Span::raw(format!("  [{d}]")).dim());
    }
    let line = Line::from(spans);
    if row.active { line.bold() } else { line }
}

/// Render the entire UI into `frame` from the view model and cursor.
pub fn draw(
    frame: &mut Frame,
    view: &NowPlayingView,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let areas = layout(frame.area(), ui_settings);

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playdeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, areas.header);

    // Now playing
    let mut lines = vec![
        Line::from(view.title.as_str()).bold(),
        Line::from(view.artist.as_str()).italic(),
    ];
    if ui_settings.show_cover {
        let cover = if view.cover.trim().is_empty() {
            "-"
        } else {
            view.cover.as_str()
        };
        lines.push(Line::from(format!("cover: {cover}")).dim());
    }
    let now_playing = Paragraph::new(lines)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(format!(" {} ", play_symbol(view.affordance))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, areas.now_playing);

    // Seek bar
    let progress = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio((view.progress_percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{} / {}", view.elapsed_text, view.total_text));
    frame.render_widget(progress, areas.progress);

    // Volume
    let volume = Gauge::default()
        .block(Block::bordered().title(" volume "))
        .ratio(f64::from(view.volume.clamp(0.0, 1.0)))
        .label(format!("{:.0}%", view.volume * 100.0));
    frame.render_widget(volume, areas.volume);

    // Playlist: only build ListItems for the visible window.
    let list_height = inner(areas.playlist).height as usize;
    let total = view.rows.len();
    let (start, end) = visible_window(total, list_height, app.selected);
    let items: Vec<ListItem> = (start..end)
        .map(|i| ListItem::new(playlist_line(view, i)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" playlist "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if total > 0 && app.selected >= start && app.selected < end {
        state.select(Some(app.selected - start));
    }
    frame.render_stateful_widget(list, areas.playlist, &mut state);

    let footer = Paragraph::new(controls_text(controls_settings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, areas.footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn seek_fraction_maps_column_inside_border() {
        let bar = rect(0, 10, 102, 3);
        assert_eq!(seek_fraction(bar, 1, 11), Some(0.0));
        assert_eq!(seek_fraction(bar, 51, 11), Some(0.5));
        assert_eq!(seek_fraction(bar, 0, 11), None);
        assert_eq!(seek_fraction(bar, 50, 10), None);
        assert_eq!(seek_fraction(bar, 101, 11), None);
    }

    #[test]
    fn visible_window_centers_selection() {
        assert_eq!(visible_window(5, 10, 3), (0, 5));
        assert_eq!(visible_window(20, 5, 0), (0, 5));
        assert_eq!(visible_window(20, 5, 10), (8, 13));
        assert_eq!(visible_window(20, 5, 19), (15, 20));
    }

    #[test]
    fn row_at_accounts_for_scroll_window() {
        let playlist = rect(0, 20, 40, 7); // 5 visible rows at y=21..=25
        assert_eq!(row_at(playlist, 5, 21, 3, 0), Some(0));
        assert_eq!(row_at(playlist, 5, 23, 3, 0), Some(2));
        assert_eq!(row_at(playlist, 5, 24, 3, 0), None);
        assert_eq!(row_at(playlist, 5, 21, 20, 10), Some(8));
        assert_eq!(row_at(playlist, 5, 20, 20, 10), None);
    }

    #[test]
    fn layout_stacks_regions_top_to_bottom() {
        let areas = layout(rect(0, 0, 80, 40), &UiSettings::default());
        assert_eq!(areas.header.y, 0);
        assert!(areas.progress.y > areas.now_playing.y);
        assert!(areas.playlist.y > areas.volume.y);
        assert_eq!(areas.footer.y + areas.footer.height, 40);
    }

    #[test]
    fn play_control_shows_offered_action() {
        assert_eq!(play_symbol(Affordance::Play), "▶ play");
        assert_eq!(play_symbol(Affordance::Pause), "⏸ pause");
    }

    #[test]
    fn controls_text_includes_configured_steps() {
        let text = controls_text(&ControlsSettings {
            scrub_seconds: 7,
            volume_step: 0.1,
        });
        assert!(text.contains("[H/L] scrub -/+7s"));
        assert!(text.contains("[+/-] volume 10%"));
        assert!(text.starts_with("[space/p] play/pause"));
    }
}
