//! Key help overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    key(&mut lines, "j / k, ↓ / ↑", "Move through the list");
    key(&mut lines, "g / G", "First / last row");
    key(&mut lines, "Enter / Space", "Load the highlighted stock");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Esc / Ctrl+C", "Quit");
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Request errors go to the log file, not the screen.",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
