//! Input dispatch: detail modal → overlays → query editing → global keys → panel keys.
//!
//! Mouse clicks are hit-tested against the same layout functions the
//! renderer uses, computed from `AppState::viewport`.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, Overlay};
use crate::modal::ModalLayout;
use crate::ui::cards;
use crate::ui::exercise_panel::ExerciseLayout;
use crate::ui::{detail_modal, nav_bar, rect_contains, AppLayout};
use crate::view::{NavButton, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. The detail modal consumes input first.
    if app.modal.is_open() {
        handle_modal_key(app, key);
        return;
    }

    // 2. Other overlays.
    match app.overlay {
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::None => {}
    }

    // 3. Query editing swallows printable keys.
    if app.search.editing {
        handle_query_edit(app, key);
        return;
    }

    // 4. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.select_nav(NavButton::ShowExercises);
            return;
        }
        KeyCode::Char('2') => {
            app.select_nav(NavButton::ShowNutrition);
            return;
        }
        KeyCode::Tab => {
            let panel = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.view.active_panel().prev()
            } else {
                app.view.active_panel().next()
            };
            app.select_nav(NavButton::for_panel(panel));
            return;
        }
        KeyCode::BackTab => {
            app.select_nav(NavButton::for_panel(app.view.active_panel().prev()));
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 5. Panel-specific keys.
    match app.view.active_panel() {
        Panel::Exercises => handle_exercise_key(app, key),
        Panel::Nutrition => {} // display only
    }
}

fn handle_modal_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.modal.hide(),
        KeyCode::Char('j') | KeyCode::Down => scroll_modal_down(app),
        KeyCode::Char('k') | KeyCode::Up => app.modal.scroll_up(),
        _ => {}
    }
}

fn scroll_modal_down(app: &mut AppState) {
    let Some(overlay) = app.modal.overlay() else {
        return;
    };
    let body = ModalLayout::new(app.viewport).body;
    let max = detail_modal::max_scroll(&overlay.content, body);
    app.modal.scroll_down(max);
}

fn scroll_errors(app: &mut AppState, down: bool) {
    if down {
        if app.error_scroll + 1 < app.error_history.len() {
            app.error_scroll += 1;
        }
    } else {
        app.error_scroll = app.error_scroll.saturating_sub(1);
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => scroll_errors(app, true),
        KeyCode::Char('k') | KeyCode::Up => scroll_errors(app, false),
        _ => {}
    }
}

fn handle_query_edit(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.search.editing = false,
        KeyCode::Enter => {
            app.search.editing = false;
            app.submit_search();
        }
        KeyCode::Backspace => {
            app.search.query.pop();
        }
        // Ctrl/Alt chords are shortcuts, not text.
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Char(c) => app.search.query.push(c),
        _ => {}
    }
}

fn handle_exercise_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('i') => app.search.editing = true,
        KeyCode::Char('m') => app.search.muscle.cycle_next(),
        KeyCode::Char('M') => app.search.muscle.cycle_prev(),
        KeyCode::Char('t') => app.search.exercise_type.cycle_next(),
        KeyCode::Char('T') => app.search.exercise_type.cycle_prev(),
        KeyCode::Char('x') => app.search.clear(),
        KeyCode::Char('s') => app.submit_search(),
        KeyCode::Char('j') | KeyCode::Down => app.results.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.results.move_cursor(-1),
        KeyCode::Enter => {
            if app.results.result_set().is_some() {
                app.open_selected_detail();
            } else {
                app.submit_search();
            }
        }
        _ => {}
    }
}

/// Handle a mouse event against the current viewport.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, column, row),
        MouseEventKind::ScrollDown => handle_wheel(app, true),
        MouseEventKind::ScrollUp => handle_wheel(app, false),
        _ => {}
    }
}

/// The wheel scrolls whatever is on top: the modal, an overlay, or the cards.
fn handle_wheel(app: &mut AppState, down: bool) {
    if app.modal.is_open() {
        if down {
            scroll_modal_down(app);
        } else {
            app.modal.scroll_up();
        }
        return;
    }
    match app.overlay {
        Overlay::ErrorHistory => scroll_errors(app, down),
        Overlay::Help => {}
        Overlay::None => app.results.move_cursor(if down { 1 } else { -1 }),
    }
}

fn handle_click(app: &mut AppState, column: u16, row: u16) {
    if app.modal.is_open() {
        let hit = ModalLayout::new(app.viewport).hit(column, row);
        app.modal.click(hit);
        return;
    }
    if app.overlay != Overlay::None {
        app.overlay = Overlay::None;
        return;
    }

    let layout = AppLayout::new(app.viewport);
    if let Some(button) = nav_bar::button_at(layout.nav, column, row) {
        app.select_nav(button);
        return;
    }

    if app.view.active_panel() != Panel::Exercises {
        return;
    }
    let panel = ExerciseLayout::new(layout.panel_inner(Panel::Exercises));
    if rect_contains(panel.search_button, column, row) {
        app.search.editing = false;
        app.submit_search();
        return;
    }
    if rect_contains(panel.form, column, row) {
        app.search.editing = true;
        return;
    }

    let (Some(count), Some(cursor)) = (app.results.result_set().map(|s| s.len()), app.results.cursor()) else {
        return;
    };
    if let Some(index) = cards::detail_control_at(panel.cards, count, cursor, column, row) {
        let id = app
            .results
            .result_set()
            .and_then(|s| s.get(index))
            .map(|e| e.id.clone());
        if let Some(id) = id {
            app.open_detail(&id);
        }
    } else if let Some(index) = cards::card_at(panel.cards, count, cursor, column, row) {
        app.results.set_cursor(index);
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1 / 2", "Show Exercises / Nutrition"),
        ("Tab / Shift+Tab", "Next / previous panel"),
        ("/ or i", "Edit name query"),
        ("Enter", "Search (editing) / open details"),
        ("m / M", "Cycle muscle filter"),
        ("t / T", "Cycle type filter"),
        ("s", "Search"),
        ("x", "Clear filters"),
        ("↑/k, ↓/j", "Move between cards"),
        ("Esc", "Close details / stop editing"),
        ("e", "Error history"),
        ("?", "This help"),
        ("Mouse", "Click nav, [ Search ], [ View Details ], backdrop"),
    ]
}
