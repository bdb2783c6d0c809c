//! Details — loading indicator, title, metrics, AI analysis.
//!
//! Previously rendered details stay on screen while a new request is
//! outstanding; the loading line is drawn above them.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use stockview_core::render::{ANALYSIS_HEADING, LOADING, METRICS_HEADING};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(lines(app)).wrap(Wrap { trim: false }), area);
}

/// Lines of the details panel, top to bottom.
pub fn lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    if app.viewer.is_loading() {
        lines.push(Line::from(Span::styled(LOADING, theme::warning())));
        lines.push(Line::from(""));
    }

    let Some(view) = app.viewer.details() else {
        if !app.viewer.is_loading() && app.viewer.selection().is_none() {
            lines.push(Line::from(Span::styled(
                "Pick a stock on the left and press Enter.",
                theme::muted(),
            )));
        }
        return lines;
    };

    lines.push(Line::from(Span::styled(view.title, theme::accent_bold())));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(METRICS_HEADING, theme::neutral())));
    for metric in view.metrics {
        lines.push(Line::from(vec![
            Span::styled("  • ", theme::muted()),
            Span::styled(metric, theme::text()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(ANALYSIS_HEADING, theme::neutral())));
    for text_line in view.analysis.lines() {
        lines.push(Line::from(Span::styled(text_line.to_string(), theme::text())));
    }

    lines
}
