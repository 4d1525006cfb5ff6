//! Exercise record as served by the catalog.

use serde::{Deserialize, Serialize};

/// One exercise from the catalog. Read-only on our side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Target muscle.
    pub target: String,
    pub equipment: String,
    #[serde(rename = "bodyPart")]
    pub body_part: String,
    /// Animated image reference.
    #[serde(rename = "gifUrl", default)]
    pub gif_url: String,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Exercise {
    pub fn display_name(&self) -> String {
        capitalize_first(&self.name)
    }

    pub fn display_target(&self) -> String {
        capitalize_first(&self.target)
    }

    pub fn display_equipment(&self) -> String {
        capitalize_first(&self.equipment)
    }

    pub fn display_body_part(&self) -> String {
        capitalize_first(&self.body_part)
    }

    /// Instructions prefixed with their 1-based position.
    pub fn numbered_instructions(&self) -> Vec<String> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1))
            .collect()
    }
}

/// Uppercase the first character and leave the rest untouched.
///
/// Not title case: `"barbell curl"` becomes
/// `"Barbell curl"`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
