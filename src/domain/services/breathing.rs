use crate::domain::models::{BreathingExercise, BreathingPhase, PhaseKind};

pub const COUNTDOWN_SECS: u32 = 3;
/// Resting circle size as a fraction of its expanded size
pub const CIRCLE_BASE_RATIO: f64 = 0.4;

/// Timer for a guided breathing exercise, driven by a 1 Hz `tick`
#[derive(Debug, Clone, PartialEq)]
pub struct BreathingSession {
    exercise: BreathingExercise,
    countdown: u32,
    started: bool,
    phase_index: usize,
    seconds_left: u32,
}

impl BreathingSession {
    pub fn new(exercise: BreathingExercise) -> Self {
        Self {
            exercise,
            countdown: COUNTDOWN_SECS,
            started: false,
            phase_index: 0,
            seconds_left: 0,
        }
    }

    pub fn exercise(&self) -> &BreathingExercise {
        &self.exercise
    }

    /// Seconds remaining before the first inhale, `None` once started
    pub fn countdown(&self) -> Option<u32> {
        (!self.started).then_some(self.countdown)
    }

    pub fn current_phase(&self) -> Option<&BreathingPhase> {
        if self.started {
            self.exercise.phases.get(self.phase_index)
        } else {
            None
        }
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn tick(&mut self) {
        if self.exercise.phases.is_empty() {
            return;
        }
        if !self.started {
            self.countdown = self.countdown.saturating_sub(1);
            if self.countdown == 0 {
                self.started = true;
                self.phase_index = 0;
                self.seconds_left = self.exercise.phases[0].duration_secs;
            }
            return;
        }

        if self.seconds_left <= 1 {
            self.phase_index = (self.phase_index + 1) % self.exercise.phases.len();
            self.seconds_left = self.exercise.phases[self.phase_index].duration_secs;
        } else {
            self.seconds_left -= 1;
        }
    }

    /// Scale of the breathing circle relative to its resting size
    pub fn circle_scale(&self) -> f64 {
        match self.current_phase().map(|p| p.kind) {
            Some(PhaseKind::Inhale) | Some(PhaseKind::Hold) => 1.0 / CIRCLE_BASE_RATIO,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::breathing::find_exercise;

    fn make_session(id: &str) -> BreathingSession {
        BreathingSession::new(*find_exercise(id).unwrap())
    }

    #[test]
    fn test_countdown_then_first_phase() {
        let mut session = make_session("478");
        assert_eq!(session.countdown(), Some(3));
        session.tick();
        session.tick();
        assert_eq!(session.countdown(), Some(1));
        assert!(session.current_phase().is_none());
        session.tick();
        assert_eq!(session.countdown(), None);
        assert_eq!(session.current_phase().unwrap().kind, PhaseKind::Inhale);
        assert_eq!(session.seconds_left(), 4);
    }

    #[test]
    fn test_phases_cycle_forever() {
        let mut session = make_session("diaphragmatic");
        for _ in 0..3 {
            session.tick();
        }
        // inhale 4s
        for _ in 0..3 {
            session.tick();
        }
        assert_eq!(session.seconds_left(), 1);
        session.tick();
        assert_eq!(session.current_phase().unwrap().kind, PhaseKind::Hold);
        assert_eq!(session.seconds_left(), 2);
        session.tick();
        session.tick();
        assert_eq!(session.current_phase().unwrap().kind, PhaseKind::Exhale);
        for _ in 0..4 {
            session.tick();
        }
        assert_eq!(session.current_phase().unwrap().kind, PhaseKind::Inhale);
        assert_eq!(session.seconds_left(), 4);
    }

    #[test]
    fn test_circle_expands_on_inhale_and_hold() {
        let mut session = make_session("box");
        assert_eq!(session.circle_scale(), 1.0);
        for _ in 0..3 {
            session.tick();
        }
        assert!((session.circle_scale() - 2.5).abs() < 1e-9);
        for _ in 0..8 {
            session.tick();
        }
        assert_eq!(session.current_phase().unwrap().kind, PhaseKind::Exhale);
        assert_eq!(session.circle_scale(), 1.0);
    }
}
