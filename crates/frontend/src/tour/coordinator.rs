//! Tour phase machine.
//!
//! `Idle -> Pending(timer) -> Active(step) -> Done`. `Done` is terminal for
//! the session: once reached, no transition re-enters `Pending`, regardless of
//! further visits to the landing route.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TourPhase {
    #[default]
    Idle,
    /// Entry timer scheduled; cancelable until it fires.
    Pending,
    Active {
        step: usize,
    },
    Done,
}

impl TourPhase {
    /// Landing route reached: schedule the entry timer. Only a fresh `Idle`
    /// tour may begin; `Done` absorbs the request.
    pub fn begin(self) -> Self {
        match self {
            TourPhase::Idle => TourPhase::Pending,
            other => other,
        }
    }

    /// Entry timer fired.
    pub fn timer_fired(self) -> Self {
        match self {
            TourPhase::Pending => TourPhase::Active { step: 0 },
            other => other,
        }
    }

    /// Route changed away before the timer fired.
    pub fn cancel_pending(self) -> Self {
        match self {
            TourPhase::Pending => TourPhase::Idle,
            other => other,
        }
    }

    /// Backdrop click: next step, or `Done` after the last one.
    pub fn advance(self, step_count: usize) -> Self {
        match self {
            TourPhase::Active { step } if step + 1 < step_count => TourPhase::Active { step: step + 1 },
            TourPhase::Active { .. } => TourPhase::Done,
            other => other,
        }
    }

    /// Explicit skip control: straight to `Done` from any active step.
    pub fn skip(self) -> Self {
        match self {
            TourPhase::Active { .. } | TourPhase::Pending => TourPhase::Done,
            other => other,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TourPhase::Active { .. })
    }

    pub fn step(&self) -> Option<usize> {
        match self {
            TourPhase::Active { step } => Some(*step),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_reaches_done() {
        let n = 4;
        let mut phase = TourPhase::Idle.begin().timer_fired();
        assert_eq!(phase, TourPhase::Active { step: 0 });
        for expected in 1..n {
            phase = phase.advance(n);
            assert_eq!(phase, TourPhase::Active { step: expected });
        }
        // One more advance past the last step terminates the tour.
        assert_eq!(phase.advance(n), TourPhase::Done);
    }

    #[test]
    fn skip_terminates_from_any_step() {
        for step in 0..4 {
            assert_eq!(TourPhase::Active { step }.skip(), TourPhase::Done);
        }
    }

    #[test]
    fn done_is_terminal_for_the_session() {
        assert_eq!(TourPhase::Done.begin(), TourPhase::Done);
        assert_eq!(TourPhase::Done.timer_fired(), TourPhase::Done);
        assert_eq!(TourPhase::Done.advance(4), TourPhase::Done);
        assert_eq!(TourPhase::Done.skip(), TourPhase::Done);
    }

    #[test]
    fn navigating_away_cancels_pending() {
        let phase = TourPhase::Idle.begin();
        assert_eq!(phase, TourPhase::Pending);
        assert_eq!(phase.cancel_pending(), TourPhase::Idle);
        // A later visit can schedule again as long as the tour never ran.
        assert_eq!(phase.cancel_pending().begin(), TourPhase::Pending);
    }

    #[test]
    fn timer_firing_after_cancel_is_ignored() {
        let phase = TourPhase::Idle.begin().cancel_pending();
        assert_eq!(phase.timer_fired(), TourPhase::Idle);
    }
}
