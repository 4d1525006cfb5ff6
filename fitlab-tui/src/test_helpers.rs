//! Shared fixtures for unit tests.

use fitlab_core::Exercise;

pub fn exercise(id: &str, name: &str, target: &str, equipment: &str) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        target: target.into(),
        equipment: equipment.into(),
        body_part: "upper arms".into(),
        gif_url: format!("https://example.test/{id}.gif"),
        instructions: vec![
            "Stand up straight.".into(),
            "Curl the weight up.".into(),
            "Lower slowly.".into(),
        ],
    }
}

pub fn sample_exercises() -> Vec<Exercise> {
    vec![
        exercise("0294", "barbell curl", "biceps", "barbell"),
        exercise("0313", "dumbbell hammer curl", "biceps", "dumbbell"),
        exercise("0860", "triceps dip", "triceps", "body weight"),
    ]
}
