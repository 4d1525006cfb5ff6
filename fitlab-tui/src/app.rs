//! Application state: single-owner, main-thread only.
//!
//! The worker thread never touches this; it only sees `WorkerCommand`s and
//! answers with `WorkerResponse`s.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;
use fitlab_core::{CatalogError, FilterOptions};
use ratatui::layout::Rect;

use crate::modal::DetailModal;
use crate::request::RequestTracker;
use crate::results::{ResultsView, LOADING_MESSAGE};
use crate::search::SearchForm;
use crate::view::{NavButton, ViewState};
use crate::worker::{WorkerCommand, WorkerResponse};

pub const ERROR_HISTORY_CAP: usize = 50;

/// Colour of the status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Short tag shown next to each history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Data,
    Config,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Http => "HTTP",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Config => "CFG",
            ErrorCategory::Other => "ERR",
        }
    }

    fn of(err: &CatalogError) -> Self {
        match err.category() {
            "network" => ErrorCategory::Network,
            "http" => ErrorCategory::Http,
            "data" => ErrorCategory::Data,
            "config" => ErrorCategory::Config,
            _ => ErrorCategory::Other,
        }
    }
}

/// One failure shown in the error history.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which non-detail overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    ErrorHistory,
    Help,
}

/// Everything the renderer and input handlers need.
pub struct AppState {
    pub running: bool,
    pub view: ViewState,

    // Exercise panel
    pub search: SearchForm,
    pub results: ResultsView,
    pub modal: DetailModal,

    // Search worker
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    pub requests: RequestTracker,

    // Status, history, overlays
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    /// Last known terminal area, for mouse hit-testing.
    pub viewport: Rect,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        requests: RequestTracker,
        filters: &FilterOptions,
    ) -> Self {
        Self {
            running: true,
            view: ViewState::initial(),
            search: SearchForm::new(filters),
            results: ResultsView::Idle,
            modal: DetailModal::new(),
            worker_tx,
            worker_rx,
            requests,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            viewport: Rect::default(),
        }
    }

    pub fn select_nav(&mut self, button: NavButton) {
        self.view = self.view.select(button);
    }

    /// Send the current form as a new search and show the loading state.
    pub fn submit_search(&mut self) {
        let query = self.search.to_query();
        let generation = self.requests.begin();
        tracing::info!(generation, query = %query.describe(), "search submitted");

        self.results = ResultsView::Loading;
        self.set_status(LOADING_MESSAGE);

        let cmd = WorkerCommand::Search { generation, query };
        if self.worker_tx.send(cmd).is_err() {
            let msg = "Search worker is not running.".to_string();
            self.results = ResultsView::Failed(msg.clone());
            self.push_error(ErrorCategory::Other, msg, "submit search".into());
        }
    }

    /// Apply a worker response. Responses for superseded searches are dropped.
    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::SearchDone {
                generation,
                query,
                outcome,
            } => {
                if !self.requests.is_current(generation) {
                    tracing::debug!(generation, latest = self.requests.latest(), "dropping stale response");
                    return;
                }

                if let Err(e) = &outcome {
                    self.push_error(ErrorCategory::of(e), e.to_string(), query.describe());
                }
                self.results = ResultsView::from_outcome(outcome);
                let found = self.results.result_set().map(|set| set.len());
                match found {
                    Some(n) => self.set_status(format!("{n} exercises for {}", query.describe())),
                    None if matches!(self.results, ResultsView::Empty) => {
                        self.set_warning("No exercises found")
                    }
                    None => {}
                }
            }
        }
    }

    /// Open the detail overlay for the record with `id` in the current results.
    pub fn open_detail(&mut self, id: &str) {
        let Some(set) = self.results.result_set() else {
            return;
        };
        let Some(position) = set.position(id) else {
            tracing::warn!(id, "detail requested for unknown exercise");
            return;
        };
        if let Some(exercise) = set.get(position) {
            self.modal.show(exercise);
        }
        self.results.set_cursor(position);
    }

    /// Open the detail overlay for the card under the cursor.
    pub fn open_selected_detail(&mut self) {
        if let Some(id) = self.results.selected_id().map(str::to_string) {
            self.open_detail(&id);
        }
    }

    /// Record a failure (newest first, oldest dropped past the cap) and show it
    /// in the status bar.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::EMPTY_MESSAGE;
    use crate::test_helpers::sample_exercises;
    use crate::view::Panel;
    use fitlab_core::ExerciseQuery;
    use std::sync::mpsc;

    fn app() -> (AppState, Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        let state = AppState::new(cmd_tx, resp_rx, RequestTracker::new(), &FilterOptions::default());
        (state, cmd_rx)
    }

    fn done(generation: u64, outcome: Result<Vec<fitlab_core::Exercise>, CatalogError>) -> WorkerResponse {
        WorkerResponse::SearchDone {
            generation,
            query: ExerciseQuery::default(),
            outcome,
        }
    }

    #[test]
    fn starts_on_exercises_panel() {
        let (app, _rx) = app();
        assert_eq!(app.view.active_panel(), Panel::Exercises);
        assert!(matches!(app.results, ResultsView::Idle));
    }

    #[test]
    fn submit_shows_loading_and_sends_command() {
        let (mut app, rx) = app();
        app.search.query = "curl".into();
        app.submit_search();

        assert!(matches!(app.results, ResultsView::Loading));
        match rx.try_recv().unwrap() {
            WorkerCommand::Search { generation, query } => {
                assert_eq!(generation, 1);
                assert_eq!(query.name, "curl");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn submit_without_worker_fails_inline() {
        let (mut app, rx) = app();
        drop(rx);
        app.submit_search();
        assert!(matches!(app.results, ResultsView::Failed(_)));
        assert_eq!(app.error_history.len(), 1);
    }

    #[test]
    fn empty_response_shows_empty_state() {
        let (mut app, _rx) = app();
        app.submit_search();
        app.handle_worker_response(done(1, Ok(Vec::new())));
        assert_eq!(app.results.message(), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn error_response_is_recorded() {
        let (mut app, _rx) = app();
        app.submit_search();
        app.handle_worker_response(done(
            1,
            Err(CatalogError::Http {
                status: 404,
                message: "Not Found".into(),
            }),
        ));
        assert!(app.results.message().unwrap().contains("404"));
        assert_eq!(app.error_history[0].category, ErrorCategory::Http);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
    }

    #[test]
    fn stale_response_is_dropped() {
        let (mut app, _rx) = app();
        app.submit_search();
        app.submit_search();
        app.handle_worker_response(done(1, Ok(sample_exercises())));
        assert!(matches!(app.results, ResultsView::Loading));

        app.handle_worker_response(done(2, Ok(Vec::new())));
        assert!(matches!(app.results, ResultsView::Empty));
    }

    #[test]
    fn open_detail_by_id() {
        let (mut app, _rx) = app();
        app.submit_search();
        app.handle_worker_response(done(1, Ok(sample_exercises())));

        app.open_detail("0860");
        assert!(app.modal.is_open());
        assert_eq!(app.modal.overlay().unwrap().content.title, "Triceps dip");
        assert_eq!(app.results.cursor(), Some(2));

        app.modal.hide();
        app.open_detail("missing");
        assert!(!app.modal.is_open());
    }

    #[test]
    fn error_history_caps_at_50() {
        let (mut app, _rx) = app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }
}
