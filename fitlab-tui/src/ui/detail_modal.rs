//! Detail modal rendering: dimmed backdrop, content box, close controls.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::modal::{DetailContent, ModalLayout, CLOSE_BUTTON, CLOSE_GLYPH};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(overlay) = app.modal.overlay().filter(|o| o.open) else {
        return;
    };
    let layout = ModalLayout::new(area);

    f.buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));
    f.render_widget(Clear, layout.content);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", overlay.content.title))
        .title_style(theme::accent_bold());
    f.render_widget(block, layout.content);

    f.render_widget(
        Paragraph::new(Span::styled(CLOSE_GLYPH, theme::negative())),
        layout.close_glyph,
    );

    let scroll = overlay.scroll.min(max_scroll(&overlay.content, layout.body));
    f.render_widget(body(&overlay.content).scroll((scroll, 0)), layout.body);

    f.render_widget(
        Paragraph::new(Span::styled(CLOSE_BUTTON, theme::control(true))),
        layout.close_button,
    );
}

fn body(content: &DetailContent) -> Paragraph<'_> {
    Paragraph::new(body_lines(content)).wrap(Wrap { trim: false })
}

/// Largest scroll offset that still leaves the body area filled.
pub fn max_scroll(content: &DetailContent, area: Rect) -> u16 {
    let lines = body(content).line_count(area.width);
    let lines = u16::try_from(lines).unwrap_or(u16::MAX);
    lines.saturating_sub(area.height)
}

fn body_lines(content: &DetailContent) -> Vec<Line<'_>> {
    let mut lines = vec![
        field("Body Part", &content.body_part),
        field("Target Muscle", &content.target),
        field("Equipment", &content.equipment),
        Line::from(""),
        Line::from(Span::styled("Instructions:", theme::accent_bold())),
    ];
    if content.instructions.is_empty() {
        lines.push(Line::from(Span::styled("  (none provided)", theme::muted())));
    }
    for step in &content.instructions {
        lines.push(Line::from(Span::styled(format!("  {step}"), theme::text())));
    }
    lines.push(Line::from(""));
    lines.push(field("Image", &content.image));
    lines
}

fn field<'a>(label: &str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value, theme::text()),
    ])
}
