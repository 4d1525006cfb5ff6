//! FitLab TUI: two-panel terminal browser for the exercise catalog.
//!
//! Panels:
//! 1. Exercises: search form, result cards, detail modal
//! 2. Nutrition: static placeholder
//!
//! State lives in `AppState` on the main thread; catalog calls run on a
//! background worker and come back tagged with a request generation so
//! only the newest search is ever displayed.

pub mod app;
pub mod input;
pub mod logging;
pub mod modal;
pub mod request;
pub mod results;
pub mod search;
pub mod theme;
pub mod ui;
pub mod view;
pub mod worker;

pub use app::AppState;
pub use view::{NavButton, Panel, ViewState};

#[cfg(test)]
mod test_helpers;
