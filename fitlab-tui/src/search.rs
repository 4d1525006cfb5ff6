//! Search form: free-text query plus two option selectors.

use fitlab_core::{ExerciseQuery, FilterOptions};

/// A selector over a fixed option list. `None` means "any".
#[derive(Debug, Clone)]
pub struct Selector {
    options: Vec<String>,
    selected: Option<usize>,
}

impl Selector {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Step forward: any → first → ... → last → any.
    pub fn cycle_next(&mut self) {
        self.selected = match self.selected {
            None if !self.options.is_empty() => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            _ => None,
        };
    }

    /// Step backward: any → last → ... → first → any.
    pub fn cycle_prev(&mut self) {
        self.selected = match self.selected {
            None => self.options.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Selected value, or `""` for "any".
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn label(&self) -> &str {
        match self.value() {
            "" => "any",
            v => v,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    pub query: String,
    /// True while keystrokes go into `query`.
    pub editing: bool,
    pub muscle: Selector,
    pub exercise_type: Selector,
}

impl SearchForm {
    pub fn new(options: &FilterOptions) -> Self {
        Self {
            query: String::new(),
            editing: false,
            muscle: Selector::new(options.muscles.clone()),
            exercise_type: Selector::new(options.types.clone()),
        }
    }

    pub fn to_query(&self) -> ExerciseQuery {
        ExerciseQuery::new(
            self.query.trim(),
            self.muscle.value(),
            self.exercise_type.value(),
        )
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.editing = false;
        self.muscle.clear();
        self.exercise_type.clear();
    }
}
