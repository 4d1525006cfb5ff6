//! Top-level UI layout: nav bar, active panel, status bar, overlays.
//!
//! Layout functions are pure so that input handling can hit-test mouse
//! clicks against the same rectangles the renderer draws into.

pub mod cards;
pub mod detail_modal;
pub mod exercise_panel;
pub mod nav_bar;
pub mod nutrition_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;
use crate::view::Panel;

/// Screen split: one-line nav bar, panel body, one-line status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);
        Self {
            nav: chunks[0],
            body: chunks[1],
            status: chunks[2],
        }
    }

    /// Area inside the panel border.
    pub fn panel_inner(&self, panel: Panel) -> Rect {
        panel_block(panel).inner(self.body)
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let layout = AppLayout::new(area);

    nav_bar::render(f, layout.nav, app);
    draw_panel(f, &layout, app);
    status_bar::render(f, layout.status, app);

    // Overlays on top; the detail modal is the topmost.
    match app.overlay {
        Overlay::ErrorHistory => overlays::render_error_history(f, layout.body, app),
        Overlay::Help => overlays::render_help(f, layout.body),
        Overlay::None => {}
    }
    if app.modal.is_open() {
        detail_modal::render(f, area, app);
    }
}

fn panel_block(panel: Panel) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true))
}

/// Draw the single visible panel with its border.
fn draw_panel(f: &mut Frame, layout: &AppLayout, app: &AppState) {
    let panel = app.view.active_panel();
    let block = panel_block(panel);
    let inner = block.inner(layout.body);
    f.render_widget(block, layout.body);

    match panel {
        Panel::Exercises => exercise_panel::render(f, inner, app),
        Panel::Nutrition => nutrition_panel::render(f, inner),
    }
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

pub fn rect_contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x.saturating_add(r.width) && row >= r.y && row < r.y.saturating_add(r.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use fitlab_core::{CatalogError, FilterOptions};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::request::RequestTracker;
    use crate::results::{ResultsView, EMPTY_MESSAGE};
    use crate::test_helpers::sample_exercises;
    use crate::view::NavButton;

    fn app() -> AppState {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        AppState::new(cmd_tx, resp_rx, RequestTracker::new(), &FilterOptions::default())
    }

    /// Render one frame and return the screen as text rows.
    fn screen(app: &AppState) -> Vec<String> {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn count(rows: &[String], needle: &str) -> usize {
        rows.iter().map(|r| r.matches(needle).count()).sum()
    }

    #[test]
    fn renders_one_card_per_record() {
        let mut app = app();
        app.results = ResultsView::from_outcome(Ok(sample_exercises()));
        let rows = screen(&app);
        assert_eq!(count(&rows, cards::DETAIL_CONTROL), sample_exercises().len());
        assert_eq!(count(&rows, "Barbell curl"), 1);
        assert_eq!(count(&rows, "Dumbbell hammer curl"), 1);
    }

    #[test]
    fn empty_results_render_message_not_cards() {
        let mut app = app();
        app.results = ResultsView::from_outcome(Ok(Vec::new()));
        let rows = screen(&app);
        assert_eq!(count(&rows, EMPTY_MESSAGE), 1);
        assert_eq!(count(&rows, cards::DETAIL_CONTROL), 0);
    }

    #[test]
    fn http_failure_renders_status() {
        let mut app = app();
        app.results = ResultsView::from_outcome(Err(CatalogError::Http {
            status: 404,
            message: "Not Found".into(),
        }));
        let rows = screen(&app);
        assert!(rows.iter().any(|r| r.contains("404")));
    }

    #[test]
    fn nutrition_panel_hides_search() {
        let mut app = app();
        app.select_nav(NavButton::ShowNutrition);
        let rows = screen(&app);
        assert!(rows.iter().any(|r| r.contains("Nutrition [2]")));
        assert_eq!(count(&rows, exercise_panel::SEARCH_BUTTON), 0);
    }

    #[test]
    fn open_modal_renders_close_controls() {
        let mut app = app();
        app.results = ResultsView::from_outcome(Ok(sample_exercises()));
        app.open_detail("0294");
        let rows = screen(&app);
        assert_eq!(count(&rows, crate::modal::CLOSE_BUTTON), 1);
        assert!(rows.iter().any(|r| r.contains("1. Stand up straight.")));
    }

    #[test]
    fn error_history_lists_newest_first() {
        let mut app = app();
        app.push_error(crate::app::ErrorCategory::Network, "connection reset".into(), "name=curl".into());
        app.push_error(crate::app::ErrorCategory::Http, "HTTP error 429 - Too Many Requests".into(), String::new());
        app.overlay = Overlay::ErrorHistory;
        let rows = screen(&app);

        let newest = rows.iter().position(|r| r.contains("HTTP error 429")).unwrap();
        let oldest = rows.iter().position(|r| r.contains("connection reset")).unwrap();
        assert!(newest < oldest);
        assert!(rows.iter().any(|r| r.contains("search: name=curl")));
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(r, 2, 3));
        assert!(rect_contains(r, 5, 4));
        assert!(!rect_contains(r, 6, 4));
        assert!(!rect_contains(r, 2, 5));
    }
}
