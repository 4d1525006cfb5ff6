//! Results area state and the card model the renderer draws from.

use fitlab_core::{CatalogError, Exercise, ResultSet};

pub const LOADING_MESSAGE: &str = "Loading exercises...";
pub const EMPTY_MESSAGE: &str = "No exercises found matching your criteria.";
pub const IDLE_MESSAGE: &str = "Set filters and press s to search.";

/// What the results area currently shows.
#[derive(Debug, Clone, Default)]
pub enum ResultsView {
    #[default]
    Idle,
    Loading,
    Empty,
    Failed(String),
    Loaded { set: ResultSet, cursor: usize },
}

impl ResultsView {
    /// Map a finished search onto the next view.
    pub fn from_outcome(outcome: Result<Vec<Exercise>, CatalogError>) -> Self {
        match outcome {
            Ok(records) if records.is_empty() => ResultsView::Empty,
            Ok(records) => ResultsView::Loaded {
                set: ResultSet::new(records),
                cursor: 0,
            },
            Err(e) => ResultsView::Failed(failure_message(&e)),
        }
    }

    /// Text shown instead of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultsView::Idle => Some(IDLE_MESSAGE),
            ResultsView::Loading => Some(LOADING_MESSAGE),
            ResultsView::Empty => Some(EMPTY_MESSAGE),
            ResultsView::Failed(msg) => Some(msg.as_str()),
            ResultsView::Loaded { .. } => None,
        }
    }

    pub fn result_set(&self) -> Option<&ResultSet> {
        match self {
            ResultsView::Loaded { set, .. } => Some(set),
            _ => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            ResultsView::Loaded { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if let ResultsView::Loaded { set, cursor } = self {
            let last = set.len().saturating_sub(1);
            *cursor = cursor.saturating_add_signed(delta).min(last);
        }
    }

    pub fn set_cursor(&mut self, index: usize) {
        if let ResultsView::Loaded { set, cursor } = self {
            if index < set.len() {
                *cursor = index;
            }
        }
    }

    /// Id of the record under the cursor.
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            ResultsView::Loaded { set, cursor } => set.get(*cursor).map(|e| e.id.as_str()),
            _ => None,
        }
    }
}

/// Inline error text for a failed search.
pub fn failure_message(err: &CatalogError) -> String {
    format!("Failed to load exercises. Error: {err}. Please check your API key and try again.")
}

/// Everything one card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Id the detail control resolves through the result set.
    pub id: String,
    pub title: String,
    pub target: String,
    pub equipment: String,
    pub image: String,
}

impl From<&Exercise> for CardView {
    fn from(ex: &Exercise) -> Self {
        Self {
            id: ex.id.clone(),
            title: ex.display_name(),
            target: ex.display_target(),
            equipment: ex.display_equipment(),
            image: ex.gif_url.clone(),
        }
    }
}

/// One card per record, in result order.
pub fn cards(set: &ResultSet) -> Vec<CardView> {
    set.records().iter().map(CardView::from).collect()
}
