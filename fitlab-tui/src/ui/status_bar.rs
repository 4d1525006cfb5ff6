//! Bottom status bar: key hints on the left, latest status message after.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

const HINTS: &str = " 1:Exercises 2:Nutrition ?:Help e:Errors q:Quit ";

fn level_style(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => theme::accent(),
        StatusLevel::Warning => theme::warning(),
        StatusLevel::Error => theme::negative(),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let status = app
        .status_message
        .as_ref()
        .map(|(msg, level)| Span::styled(msg.as_str(), level_style(*level)))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(HINTS, theme::muted()),
        Span::styled("│ ", theme::neutral()),
        status,
    ]);
    f.render_widget(Paragraph::new(line), area);
}
