//! Overlay widgets: error history and key-binding help.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, ErrorRecord, ERROR_HISTORY_CAP};
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

/// Newest failures first, two rows each: what failed and for which search.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    let title = format!(
        " Errors: {} of {} kept [j/k] [Esc] ",
        app.error_history.len(),
        ERROR_HISTORY_CAP
    );
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(title)
        .title_style(theme::negative());
    let inner = frame.inner(popup);

    f.render_widget(Clear, popup);
    f.render_widget(frame, popup);

    let lines: Vec<Line> = if app.error_history.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing has failed this session.",
            theme::muted(),
        ))]
    } else {
        app.error_history
            .iter()
            .enumerate()
            .skip(app.error_scroll)
            .flat_map(|(i, record)| error_rows(record, i == app.error_scroll))
            .take(inner.height as usize)
            .collect()
    };

    f.render_widget(Paragraph::new(lines), inner);
}

fn error_rows(record: &ErrorRecord, focused: bool) -> Vec<Line<'_>> {
    let message_style = if focused {
        theme::negative().add_modifier(Modifier::BOLD)
    } else {
        theme::text()
    };
    let when = record.timestamp.format("%H:%M:%S").to_string();
    let mut rows = vec![Line::from(vec![
        Span::styled(when, theme::muted()),
        Span::raw(" "),
        Span::styled(format!("{:<4}", record.category.label()), theme::warning()),
        Span::raw(" "),
        Span::styled(record.message.as_str(), message_style),
    ])];
    if !record.context.is_empty() {
        rows.push(Line::from(Span::styled(
            format!("              search: {}", record.context),
            theme::muted(),
        )));
    }
    rows
}

/// Key-binding help overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let lines: Vec<Line> = key_bindings_help()
        .into_iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {keys:>16}  "), theme::accent()),
                Span::styled(action, theme::muted()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
