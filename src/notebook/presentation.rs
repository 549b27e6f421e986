/// Whether a cell is (or is becoming) visible in the rendered notebook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Pace of a show or hide transition, expressed in event-loop ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Roughly 600ms at the standard tick rate.
    Slow,
    /// Roughly 200ms at the standard tick rate.
    Fast,
    /// Settle on the very next frame.
    Immediate,
}

impl Transition {
    fn step_size(self) -> f32 {
        match self {
            Transition::Slow => 1.0 / 36.0,
            Transition::Fast => 1.0 / 12.0,
            Transition::Immediate => 1.0,
        }
    }
}

/// Host-owned display state for a single cell.
///
/// `show` and `hide` only record the target; the event loop drives the
/// animation by calling [`CellPresentation::advance`] once per tick. Both
/// calls are idempotent: asking for the state a cell is already in (or is
/// already moving toward) does not restart the transition.
#[derive(Debug, Clone, Copy)]
pub struct CellPresentation {
    target: Visibility,
    factor: f32,
    step: f32,
}

impl Default for CellPresentation {
    fn default() -> Self {
        Self {
            target: Visibility::Visible,
            factor: 1.0,
            step: 0.0,
        }
    }
}

impl CellPresentation {
    /// Begin revealing the cell at the given pace.
    pub fn show(&mut self, transition: Transition) {
        if self.target == Visibility::Visible {
            return;
        }
        self.target = Visibility::Visible;
        self.step = transition.step_size();
        if matches!(transition, Transition::Immediate) {
            self.factor = 1.0;
        }
    }

    /// Begin collapsing the cell at the given pace.
    pub fn hide(&mut self, transition: Transition) {
        if self.target == Visibility::Hidden {
            return;
        }
        self.target = Visibility::Hidden;
        self.step = transition.step_size();
        if matches!(transition, Transition::Immediate) {
            self.factor = 0.0;
        }
    }

    /// Move one tick further along the current transition.
    pub fn advance(&mut self) {
        match self.target {
            Visibility::Visible => self.factor = (self.factor + self.step).min(1.0),
            Visibility::Hidden => self.factor = (self.factor - self.step).max(0.0),
        }
    }

    /// Jump straight to the target state, used when animations are disabled.
    pub fn snap(&mut self) {
        self.factor = match self.target {
            Visibility::Visible => 1.0,
            Visibility::Hidden => 0.0,
        };
    }

    /// The state this cell is settling toward.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.target
    }

    /// Fraction of the cell's natural height that should currently render.
    #[must_use]
    pub fn height_factor(&self) -> f32 {
        self.factor
    }

    /// Whether the transition has finished.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        match self.target {
            Visibility::Visible => self.factor >= 1.0,
            Visibility::Hidden => self.factor <= 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_presentation_is_fully_visible() {
        let presentation = CellPresentation::default();
        assert_eq!(presentation.visibility(), Visibility::Visible);
        assert!(presentation.is_settled());
        assert_eq!(presentation.height_factor(), 1.0);
    }

    #[test]
    fn hide_then_advance_collapses_over_multiple_ticks() {
        let mut presentation = CellPresentation::default();
        presentation.hide(Transition::Slow);
        assert_eq!(presentation.visibility(), Visibility::Hidden);
        assert!(!presentation.is_settled());

        let mut ticks = 0;
        while !presentation.is_settled() {
            presentation.advance();
            ticks += 1;
            assert!(ticks <= 64, "slow hide should settle within a bounded tick count");
        }
        assert_eq!(presentation.height_factor(), 0.0);
        assert!(ticks >= 30, "slow hide settled after {ticks} ticks, expected a gradual collapse");
    }

    #[test]
    fn fast_transition_settles_sooner_than_slow() {
        let settle = |transition| {
            let mut presentation = CellPresentation::default();
            presentation.hide(transition);
            let mut ticks = 0;
            while !presentation.is_settled() {
                presentation.advance();
                ticks += 1;
            }
            ticks
        };
        assert!(settle(Transition::Fast) < settle(Transition::Slow));
    }

    #[test]
    fn immediate_transition_settles_without_ticks() {
        let mut presentation = CellPresentation::default();
        presentation.hide(Transition::Immediate);
        assert!(presentation.is_settled());
        assert_eq!(presentation.height_factor(), 0.0);

        presentation.show(Transition::Immediate);
        assert!(presentation.is_settled());
        assert_eq!(presentation.height_factor(), 1.0);
    }

    #[test]
    fn show_is_idempotent_mid_transition() {
        let mut presentation = CellPresentation::default();
        presentation.hide(Transition::Immediate);
        presentation.show(Transition::Slow);
        presentation.advance();
        let progress = presentation.height_factor();

        // A second show must not reset the animation already in flight.
        presentation.show(Transition::Slow);
        assert_eq!(presentation.height_factor(), progress);
        assert_eq!(presentation.visibility(), Visibility::Visible);
    }

    #[test]
    fn hide_on_hidden_cell_is_a_no_op() {
        let mut presentation = CellPresentation::default();
        presentation.hide(Transition::Immediate);
        presentation.hide(Transition::Slow);
        assert!(presentation.is_settled());
        assert_eq!(presentation.height_factor(), 0.0);
    }

    #[test]
    fn advance_on_settled_presentation_holds_position() {
        let mut presentation = CellPresentation::default();
        presentation.advance();
        assert_eq!(presentation.height_factor(), 1.0);

        presentation.hide(Transition::Immediate);
        presentation.advance();
        assert_eq!(presentation.height_factor(), 0.0);
    }

    #[test]
    fn snap_completes_a_running_transition() {
        let mut presentation = CellPresentation::default();
        presentation.hide(Transition::Slow);
        presentation.advance();
        assert!(!presentation.is_settled());

        presentation.snap();
        assert!(presentation.is_settled());
        assert_eq!(presentation.height_factor(), 0.0);
    }
}
