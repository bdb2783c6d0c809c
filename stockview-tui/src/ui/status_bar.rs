//! Bottom status bar — key hints, outstanding requests, last update.
//!
//! Request failures are logged, not shown here.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(line(app)), area);
}

pub fn line(app: &AppState) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        " j/k:move Enter:select ?:help q:quit",
        theme::muted(),
    )];

    let in_flight = app.viewer.in_flight();
    if in_flight > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("{in_flight} in flight"), theme::warning()));
    }

    if let Some(at) = app.viewer.last_updated() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("updated {}", at.format("%H:%M:%S")),
            theme::accent(),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.endpoint.clone(), theme::muted()));

    Line::from(spans)
}
