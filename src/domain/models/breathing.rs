//! Guided breathing exercises and the 5-4-3-2-1 grounding technique.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Inhale,
    Hold,
    Exhale,
}

impl PhaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            PhaseKind::Inhale => "Inhale",
            PhaseKind::Hold => "Hold",
            PhaseKind::Exhale => "Exhale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingPhase {
    pub kind: PhaseKind,
    pub duration_secs: u32,
    pub instruction: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingExercise {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
    pub phases: &'static [BreathingPhase],
}

const fn phase(kind: PhaseKind, duration_secs: u32, instruction: &'static str) -> BreathingPhase {
    BreathingPhase { kind, duration_secs, instruction }
}

pub static BREATHING_EXERCISES: &[BreathingExercise] = &[
    BreathingExercise {
        id: "box",
        title: "4-4-4 Box Breathing",
        description: "Inhale (4s) → Hold (4s) → Exhale (4s) → Hold (4s)",
        benefit: "Great for quick stress reduction",
        phases: &[
            phase(PhaseKind::Inhale, 4, "Inhale slowly through your nose..."),
            phase(PhaseKind::Hold, 4, "Hold your breath..."),
            phase(PhaseKind::Exhale, 4, "Exhale slowly through your mouth..."),
            phase(PhaseKind::Hold, 4, "Hold your breath..."),
        ],
    },
    BreathingExercise {
        id: "478",
        title: "4-7-8 Relaxing Breath",
        description: "Inhale (4s) → Hold (7s) → Exhale (8s)",
        benefit: "Perfect for deep relaxation and sleep",
        phases: &[
            phase(PhaseKind::Inhale, 4, "Inhale quietly through your nose..."),
            phase(PhaseKind::Hold, 7, "Hold your breath..."),
            phase(PhaseKind::Exhale, 8, "Exhale completely through your mouth..."),
        ],
    },
    BreathingExercise {
        id: "diaphragmatic",
        title: "Diaphragmatic Breathing",
        description: "Deep belly breathing with focus on diaphragm movement",
        benefit: "Reduces stress and anxiety",
        phases: &[
            phase(PhaseKind::Inhale, 4, "Inhale deeply into your belly..."),
            phase(PhaseKind::Hold, 2, "Hold briefly..."),
            phase(PhaseKind::Exhale, 4, "Exhale slowly and completely..."),
        ],
    },
    BreathingExercise {
        id: "focus",
        title: "Breath Focus",
        description: "Mindful breathing with counting",
        benefit: "Enhances focus and calm",
        phases: &[
            phase(PhaseKind::Inhale, 5, "Breathe in while counting to 5..."),
            phase(PhaseKind::Hold, 2, "Pause briefly..."),
            phase(PhaseKind::Exhale, 5, "Breathe out while counting to 5..."),
        ],
    },
];

pub fn find_exercise(id: &str) -> Option<&'static BreathingExercise> {
    BREATHING_EXERCISES.iter().find(|e| e.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundingStep {
    pub count: u8,
    pub sense: &'static str,
    /// CSS colour for the step highlight
    pub color: &'static str,
}

pub static GROUNDING_STEPS: [GroundingStep; 5] = [
    GroundingStep { count: 5, sense: "things you can SEE", color: "#3B82F6" },
    GroundingStep { count: 4, sense: "things you can FEEL", color: "#22C55E" },
    GroundingStep { count: 3, sense: "things you can HEAR", color: "#A855F7" },
    GroundingStep { count: 2, sense: "things you can SMELL", color: "#F59E0B" },
    GroundingStep { count: 1, sense: "thing you can TASTE", color: "#EF4444" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_timings() {
        let secs = |id: &str| -> Vec<u32> {
            find_exercise(id).unwrap().phases.iter().map(|p| p.duration_secs).collect()
        };
        assert_eq!(secs("box"), vec![4, 4, 4, 4]);
        assert_eq!(secs("478"), vec![4, 7, 8]);
        assert_eq!(secs("diaphragmatic"), vec![4, 2, 4]);
        assert_eq!(secs("focus"), vec![5, 2, 5]);
    }

    #[test]
    fn test_grounding_counts_down() {
        let counts: Vec<u8> = GROUNDING_STEPS.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![5, 4, 3, 2, 1]);
    }
}
