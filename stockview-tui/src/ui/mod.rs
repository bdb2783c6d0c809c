//! Top-level UI layout — heading, selector and details side by side, status bar.

pub mod details_panel;
pub mod overlays;
pub mod selector_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stockview_core::render::HEADING;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: heading + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(Span::styled(format!(" {HEADING}"), theme::accent_bold())),
        chunks[0],
    );

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(20)])
        .split(chunks[1]);

    draw_panel(f, main[0], " Stock ", |f, inner| selector_panel::render(f, inner, app));
    draw_panel(f, main[1], " Details ", |f, inner| details_panel::render(f, inner, app));

    status_bar::render(f, chunks[2], app);

    if app.overlay == Overlay::Help {
        overlays::render_help(f, chunks[1]);
    }
}

/// Draw a bordered panel and its content.
fn draw_panel(f: &mut Frame, area: Rect, title: &str, content: impl FnOnce(&mut Frame, Rect)) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title.to_string())
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);
    content(f, inner);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
