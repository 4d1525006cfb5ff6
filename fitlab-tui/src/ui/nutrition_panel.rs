//! Nutrition panel. Static content; no catalog behind it yet.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Nutrition", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Meal and macro tracking lives here. No nutrition source is configured.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 1 or click Exercises to search the exercise catalog.",
            theme::neutral(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
