//! Selector — placeholder row plus one row per catalog stock.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, SelectorState};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let sel = &app.selector;
    let mut lines: Vec<Line> = Vec::with_capacity(sel.row_count());

    for row in 0..sel.row_count() {
        let marker = if row == sel.value { "● " } else { "  " };
        let style = if row == sel.cursor {
            theme::cursor()
        } else if row == 0 {
            theme::muted()
        } else if row == sel.value {
            theme::positive()
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::positive()),
            Span::styled(SelectorState::row_label(row), style),
        ]));
    }

    // Keep the cursor visible on short terminals.
    let height = area.height as usize;
    let scroll = if height > 0 && sel.cursor >= height {
        sel.cursor + 1 - height
    } else {
        0
    };

    f.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), area);
}
