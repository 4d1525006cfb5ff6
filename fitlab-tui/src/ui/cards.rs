//! Result cards: one bordered card per exercise in a scrolling list.

use fitlab_core::ResultSet;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::results::{cards, CardView};
use crate::theme;
use crate::ui::rect_contains;

pub const DETAIL_CONTROL: &str = "[ View Details ]";
/// Border, three detail rows, control row, border.
pub const CARD_HEIGHT: u16 = 6;

/// Where one card lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub area: Rect,
    pub detail_control: Rect,
}

/// Index of the first card drawn so that `cursor` stays on screen.
pub fn first_visible(area: Rect, cursor: usize) -> usize {
    let per_page = (area.height / CARD_HEIGHT).max(1) as usize;
    (cursor + 1).saturating_sub(per_page)
}

/// Slots for the cards that fit in `area`.
pub fn card_slots(area: Rect, count: usize, cursor: usize) -> Vec<CardSlot> {
    if area.height < CARD_HEIGHT || area.width < 4 {
        return Vec::new();
    }
    let first = first_visible(area, cursor);
    let per_page = (area.height / CARD_HEIGHT) as usize;
    (first..count.min(first + per_page))
        .enumerate()
        .map(|(row, index)| {
            let y = area.y + row as u16 * CARD_HEIGHT;
            let card = Rect::new(area.x, y, area.width, CARD_HEIGHT);
            let control_w = (DETAIL_CONTROL.chars().count() as u16).min(card.width - 2);
            CardSlot {
                index,
                area: card,
                detail_control: Rect::new(card.x + 1, y + CARD_HEIGHT - 2, control_w, 1),
            }
        })
        .collect()
}

/// Which card's detail control, if any, is at the given cell.
pub fn detail_control_at(area: Rect, count: usize, cursor: usize, column: u16, row: u16) -> Option<usize> {
    card_slots(area, count, cursor)
        .into_iter()
        .find(|s| rect_contains(s.detail_control, column, row))
        .map(|s| s.index)
}

/// Which card body, if any, is at the given cell.
pub fn card_at(area: Rect, count: usize, cursor: usize, column: u16, row: u16) -> Option<usize> {
    card_slots(area, count, cursor)
        .into_iter()
        .find(|s| rect_contains(s.area, column, row))
        .map(|s| s.index)
}

pub fn render(f: &mut Frame, area: Rect, set: &ResultSet, cursor: usize) {
    let views = cards(set);
    for slot in card_slots(area, views.len(), cursor) {
        render_card(f, &slot, &views[slot.index], slot.index == cursor);
    }
}

fn render_card(f: &mut Frame, slot: &CardSlot, card: &CardView, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(selected))
        .title(format!(" {} ", card.title))
        .title_style(theme::accent_bold());
    let inner = block.inner(slot.area);
    f.render_widget(block, slot.area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Target Muscle: ", theme::muted()),
            Span::styled(card.target.as_str(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Equipment: ", theme::muted()),
            Span::styled(card.equipment.as_str(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Image: ", theme::muted()),
            Span::styled(card.image.as_str(), theme::neutral()),
        ]),
        Line::from(Span::styled(DETAIL_CONTROL, theme::control(selected))),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
