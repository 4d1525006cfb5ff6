//! Detail modal: one lazily built overlay, reused for every record.
//!
//! The overlay is created the first time a detail is shown. Later calls
//! replace its content instead of building a second one.

use fitlab_core::Exercise;
use ratatui::layout::Rect;

use crate::ui::{centered_rect, rect_contains};

pub const CLOSE_GLYPH: &str = "[×]";
pub const CLOSE_BUTTON: &str = "[ Close ]";

/// Formatted detail for one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub id: String,
    pub title: String,
    pub body_part: String,
    pub target: String,
    pub equipment: String,
    pub instructions: Vec<String>,
    pub image: String,
}

impl From<&Exercise> for DetailContent {
    fn from(ex: &Exercise) -> Self {
        Self {
            id: ex.id.clone(),
            title: ex.display_name(),
            body_part: ex.display_body_part(),
            target: ex.display_target(),
            equipment: ex.display_equipment(),
            instructions: ex.numbered_instructions(),
            image: ex.gif_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailOverlay {
    pub open: bool,
    pub content: DetailContent,
    pub scroll: u16,
}

/// Where a click landed relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    CloseGlyph,
    CloseButton,
    Content,
    Backdrop,
}

/// Screen geometry of the overlay for a given frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub content: Rect,
    pub body: Rect,
    pub close_glyph: Rect,
    pub close_button: Rect,
}

impl ModalLayout {
    pub fn new(area: Rect) -> Self {
        let content = centered_rect(70, 80, area);
        let glyph_w = CLOSE_GLYPH.chars().count() as u16;
        let button_w = CLOSE_BUTTON.chars().count() as u16;

        let close_glyph = Rect {
            x: content.x + content.width.saturating_sub(glyph_w + 2),
            y: content.y,
            width: glyph_w.min(content.width),
            height: 1,
        };
        let close_button = Rect {
            x: content.x + content.width.saturating_sub(button_w) / 2,
            y: content.y + content.height.saturating_sub(2),
            width: button_w.min(content.width),
            height: 1,
        };
        let body = Rect {
            x: content.x + 1,
            y: content.y + 1,
            width: content.width.saturating_sub(2),
            height: content.height.saturating_sub(4),
        };

        Self {
            content,
            body,
            close_glyph,
            close_button,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> ModalHit {
        if rect_contains(self.close_glyph, column, row) {
            ModalHit::CloseGlyph
        } else if rect_contains(self.close_button, column, row) {
            ModalHit::CloseButton
        } else if rect_contains(self.content, column, row) {
            ModalHit::Content
        } else {
            ModalHit::Backdrop
        }
    }
}

/// Owner of the single detail overlay.
#[derive(Debug, Default)]
pub struct DetailModal {
    overlay: Option<DetailOverlay>,
    constructions: usize,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the overlay with `exercise` and open it, building it on first use.
    pub fn show(&mut self, exercise: &Exercise) {
        let content = DetailContent::from(exercise);
        match self.overlay.as_mut() {
            Some(overlay) => {
                overlay.content = content;
                overlay.scroll = 0;
                overlay.open = true;
            }
            None => {
                self.constructions += 1;
                self.overlay = Some(DetailOverlay {
                    open: true,
                    content,
                    scroll: 0,
                });
            }
        }
    }

    pub fn hide(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.open = false;
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.as_ref().is_some_and(|o| o.open)
    }

    /// The overlay, whether open or not. `None` until first shown.
    pub fn overlay(&self) -> Option<&DetailOverlay> {
        self.overlay.as_ref()
    }

    /// How many overlays were ever built. Never exceeds one.
    pub fn constructions(&self) -> usize {
        self.constructions
    }

    /// Apply a click. Anything but a click inside the content box closes.
    pub fn click(&mut self, hit: ModalHit) {
        match hit {
            ModalHit::CloseGlyph | ModalHit::CloseButton | ModalHit::Backdrop => self.hide(),
            ModalHit::Content => {}
        }
    }

    /// Scroll one line, never past `max` (the last screenful of the body).
    pub fn scroll_down(&mut self, max: u16) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.scroll = overlay.scroll.saturating_add(1).min(max);
        }
    }

    pub fn scroll_up(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.scroll = overlay.scroll.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_exercises;

    #[test]
    fn starts_unbuilt() {
        let modal = DetailModal::new();
        assert!(modal.overlay().is_none());
        assert!(!modal.is_open());
        assert_eq!(modal.constructions(), 0);
    }

    #[test]
    fn reuses_single_overlay() {
        let records = sample_exercises();
        let mut modal = DetailModal::new();

        modal.show(&records[0]);
        assert_eq!(modal.overlay().unwrap().content.title, "Barbell curl");

        modal.hide();
        modal.show(&records[1]);
        assert!(modal.is_open());
        assert_eq!(modal.overlay().unwrap().content.title, "Dumbbell hammer curl");
        assert_eq!(modal.constructions(), 1);
    }

    #[test]
    fn content_click_keeps_open() {
        let mut modal = DetailModal::new();
        modal.show(&sample_exercises()[0]);
        modal.click(ModalHit::Content);
        assert!(modal.is_open());
    }

    #[test]
    fn close_controls_and_backdrop_hide() {
        for hit in [ModalHit::CloseGlyph, ModalHit::CloseButton, ModalHit::Backdrop] {
            let mut modal = DetailModal::new();
            modal.show(&sample_exercises()[0]);
            modal.click(hit);
            assert!(!modal.is_open(), "{hit:?} should close");
        }
    }

    #[test]
    fn scroll_stops_at_limit() {
        let mut modal = DetailModal::new();
        modal.show(&sample_exercises()[0]);
        for _ in 0..10 {
            modal.scroll_down(3);
        }
        assert_eq!(modal.overlay().unwrap().scroll, 3);
        modal.scroll_up();
        assert_eq!(modal.overlay().unwrap().scroll, 2);

        modal.scroll_down(0);
        assert_eq!(modal.overlay().unwrap().scroll, 0);
    }

    #[test]
    fn layout_hit_regions() {
        let layout = ModalLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.hit(0, 0), ModalHit::Backdrop);
        assert_eq!(
            layout.hit(layout.close_glyph.x + 1, layout.close_glyph.y),
            ModalHit::CloseGlyph
        );
        assert_eq!(
            layout.hit(layout.close_button.x, layout.close_button.y),
            ModalHit::CloseButton
        );
        assert_eq!(layout.hit(layout.body.x, layout.body.y), ModalHit::Content);
    }

    #[test]
    fn detail_content_is_formatted() {
        let content = DetailContent::from(&sample_exercises()[2]);
        assert_eq!(content.title, "Triceps dip");
        assert_eq!(content.equipment, "Body weight");
        assert_eq!(content.body_part, "Upper arms");
        assert_eq!(content.instructions[0], "1. Stand up straight.");
    }
}
