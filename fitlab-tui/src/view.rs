//! View switcher: which panel is shown and which nav button is lit.
//!
//! `ViewState` is a plain value with a pure transition; the renderer reads
//! it and never mutates it.

/// A top-level content panel. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Exercises,
    Nutrition,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Exercises, Panel::Nutrition];

    pub fn index(self) -> usize {
        match self {
            Panel::Exercises => 0,
            Panel::Nutrition => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Panel::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Exercises => "Exercises",
            Panel::Nutrition => "Nutrition",
        }
    }

    pub fn next(self) -> Panel {
        Panel::ALL[(self.index() + 1) % Panel::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Panel::ALL[(self.index() + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }
}

/// A navigation control in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavButton {
    ShowExercises,
    ShowNutrition,
}

impl NavButton {
    pub const ALL: [NavButton; 2] = [NavButton::ShowExercises, NavButton::ShowNutrition];

    /// The panel this button reveals.
    pub fn target(self) -> Panel {
        match self {
            NavButton::ShowExercises => Panel::Exercises,
            NavButton::ShowNutrition => Panel::Nutrition,
        }
    }

    pub fn for_panel(panel: Panel) -> NavButton {
        match panel {
            Panel::Exercises => NavButton::ShowExercises,
            Panel::Nutrition => NavButton::ShowNutrition,
        }
    }

    pub fn label(self) -> &'static str {
        self.target().label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    active: Panel,
    highlighted: NavButton,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ViewState {
    /// First panel shown, its button lit.
    pub fn initial() -> Self {
        let panel = Panel::ALL[0];
        Self {
            active: panel,
            highlighted: NavButton::for_panel(panel),
        }
    }

    /// Hide every panel, unlight every button, then show `panel` and light
    /// `control`. Activating the current pair again changes nothing.
    pub fn activate(self, panel: Panel, control: NavButton) -> Self {
        Self {
            active: panel,
            highlighted: control,
        }
    }

    /// Activate the panel a nav button points at.
    pub fn select(self, control: NavButton) -> Self {
        self.activate(control.target(), control)
    }

    pub fn active_panel(&self) -> Panel {
        self.active
    }

    pub fn highlighted(&self) -> NavButton {
        self.highlighted
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.active == panel
    }

    pub fn is_highlighted(&self, control: NavButton) -> bool {
        self.highlighted == control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(v: &ViewState) -> usize {
        Panel::ALL.iter().filter(|p| v.is_visible(**p)).count()
    }

    fn lit_count(v: &ViewState) -> usize {
        NavButton::ALL.iter().filter(|b| v.is_highlighted(**b)).count()
    }

    #[test]
    fn starts_on_exercises() {
        let v = ViewState::initial();
        assert!(v.is_visible(Panel::Exercises));
        assert!(!v.is_visible(Panel::Nutrition));
        assert!(v.is_highlighted(NavButton::ShowExercises));
        assert_eq!(visible_count(&v), 1);
        assert_eq!(lit_count(&v), 1);
    }

    #[test]
    fn select_switches_panel_and_button() {
        let v = ViewState::initial().select(NavButton::ShowNutrition);
        assert_eq!(v.active_panel(), Panel::Nutrition);
        assert_eq!(v.highlighted(), NavButton::ShowNutrition);
        assert_eq!(visible_count(&v), 1);
        assert_eq!(lit_count(&v), 1);
    }

    #[test]
    fn activate_is_idempotent() {
        let v = ViewState::initial().select(NavButton::ShowNutrition);
        assert_eq!(v.select(NavButton::ShowNutrition), v);
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Exercises.next(), Panel::Nutrition);
        assert_eq!(Panel::Nutrition.next(), Panel::Exercises);
        assert_eq!(Panel::Exercises.prev(), Panel::Nutrition);
        assert_eq!(Panel::Nutrition.prev(), Panel::Exercises);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..Panel::ALL.len() {
            assert_eq!(Panel::from_index(i).unwrap().index(), i);
        }
        assert!(Panel::from_index(2).is_none());
    }
}
