//! Exercises panel: search form on top, results below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::results::ResultsView;
use crate::theme;
use crate::ui::cards;

pub const SEARCH_BUTTON: &str = "[ Search ]";
const FORM_HEIGHT: u16 = 4;

/// Geometry of the exercise panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseLayout {
    pub form: Rect,
    pub search_button: Rect,
    /// One-line summary above the cards.
    pub header: Rect,
    pub cards: Rect,
}

impl ExerciseLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let form = chunks[0];
        let form_inner = form_block().inner(form);
        let button_w = SEARCH_BUTTON.chars().count() as u16;
        let search_button = Rect {
            x: form_inner.x + form_inner.width.saturating_sub(button_w + 1),
            y: form_inner.y,
            width: button_w.min(form_inner.width),
            height: 1.min(form_inner.height),
        };

        Self {
            form,
            search_button,
            header: chunks[1],
            cards: chunks[2],
        }
    }
}

fn form_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::neutral())
        .title(" Search [/]edit [m/M]uscle [t/T]ype [s]earch [x]clear ")
        .title_style(theme::neutral())
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let layout = ExerciseLayout::new(area);
    render_form(f, &layout, app);
    render_results(f, &layout, app);
}

fn render_form(f: &mut Frame, layout: &ExerciseLayout, app: &AppState) {
    let form = &app.search;
    let block = form_block();
    let inner = block.inner(layout.form);
    f.render_widget(block, layout.form);

    let query_style = if form.editing {
        theme::accent_bold()
    } else {
        theme::text()
    };
    let mut query_line = vec![
        Span::styled("Name:   ", theme::muted()),
        Span::styled(form.query.as_str(), query_style),
    ];
    if form.editing {
        query_line.push(Span::styled("_", theme::accent()));
    } else if form.query.is_empty() {
        query_line.push(Span::styled("(any)", theme::muted()));
    }

    let filter_line = Line::from(vec![
        Span::styled("Muscle: ", theme::muted()),
        Span::styled(format!("< {} >", form.muscle.label()), theme::accent()),
        Span::raw("   "),
        Span::styled("Type: ", theme::muted()),
        Span::styled(format!("< {} >", form.exercise_type.label()), theme::accent()),
    ]);

    f.render_widget(Paragraph::new(vec![Line::from(query_line), filter_line]), inner);

    let loading = matches!(app.results, ResultsView::Loading);
    f.render_widget(
        Paragraph::new(Span::styled(SEARCH_BUTTON, theme::control(loading))),
        layout.search_button,
    );
}

fn render_results(f: &mut Frame, layout: &ExerciseLayout, app: &AppState) {
    if let Some(msg) = app.results.message() {
        let style = match &app.results {
            ResultsView::Failed(_) => theme::negative(),
            ResultsView::Empty => theme::warning(),
            _ => theme::muted(),
        };
        let area = Rect {
            height: layout.header.height + layout.cards.height,
            ..layout.header
        };
        f.render_widget(
            Paragraph::new(Span::styled(msg, style)).wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    if let (Some(set), Some(cursor)) = (app.results.result_set(), app.results.cursor()) {
        let header = Line::from(vec![
            Span::styled(format!("{} exercises", set.len()), theme::positive()),
            Span::styled("  [j/k]move [Enter]details", theme::muted()),
        ]);
        f.render_widget(Paragraph::new(header), layout.header);
        cards::render(f, layout.cards, set, cursor);
    }
}
