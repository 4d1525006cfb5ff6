//! Top nav bar: one button per panel, the active one lit.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::view::NavButton;

fn button_text(button: NavButton) -> String {
    format!(" {} {} ", button.target().index() + 1, button.label())
}

/// Screen rectangle of every nav button, left to right.
pub fn button_rects(area: Rect) -> Vec<(NavButton, Rect)> {
    let mut x = area.x + 1;
    let mut rects = Vec::with_capacity(NavButton::ALL.len());
    for button in NavButton::ALL {
        let width = button_text(button).chars().count() as u16;
        rects.push((button, Rect::new(x, area.y, width, 1)));
        x += width + 1;
    }
    rects
}

/// Which button, if any, sits at the given cell.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<NavButton> {
    button_rects(area)
        .into_iter()
        .find(|(_, r)| super::rect_contains(*r, column, row))
        .map(|(b, _)| b)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![Span::raw(" ")];
    for button in NavButton::ALL {
        spans.push(Span::styled(
            button_text(button),
            theme::nav_button(app.view.is_highlighted(button)),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(" FitLab", theme::neutral()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_do_not_overlap() {
        let rects = button_rects(Rect::new(0, 0, 80, 1));
        assert_eq!(rects.len(), 2);
        let (_, a) = rects[0];
        let (_, b) = rects[1];
        assert!(a.x + a.width < b.x);
    }

    #[test]
    fn hit_test_finds_button() {
        let area = Rect::new(0, 0, 80, 1);
        assert_eq!(button_at(area, 2, 0), Some(NavButton::ShowExercises));
        let (_, second) = button_rects(area)[1];
        assert_eq!(button_at(area, second.x, 0), Some(NavButton::ShowNutrition));
        assert_eq!(button_at(area, 0, 0), None);
        assert_eq!(button_at(area, 79, 0), None);
    }
}
