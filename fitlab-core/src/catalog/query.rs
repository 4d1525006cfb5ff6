//! Search filters and their mapping onto catalog query parameters.

use serde::{Deserialize, Serialize};

/// A catalog search. Empty strings mean "not filtered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseQuery {
    pub name: String,
    pub muscle: String,
    pub exercise_type: String,
}

impl ExerciseQuery {
    pub fn new(
        name: impl Into<String>,
        muscle: impl Into<String>,
        exercise_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle: muscle.into(),
            exercise_type: exercise_type.into(),
        }
    }

    /// Query parameters in fixed order (`name`, `muscle`, `type`), only for
    /// filters that are non-empty.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_str()),
            ("muscle", self.muscle.as_str()),
            ("type", self.exercise_type.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.params().is_empty()
    }

    /// Short human-readable summary for logs and status lines.
    pub fn describe(&self) -> String {
        if self.is_unfiltered() {
            return "all exercises".to_string();
        }
        self.params()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
