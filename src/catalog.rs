use serde::Serialize;

use crate::models::{RoutineExercise, WorkoutRoutine};
use crate::timer::{PhaseSequence, PhaseSpec, SequenceError};

pub const DAILY_WATER_GOAL_ML: u32 = 2000;
pub const DAILY_CALORIE_GOAL: u32 = 2200;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CupSize {
    pub label: &'static str,
    pub ml: u32,
}

pub const CUP_SIZES: [CupSize; 3] = [
    CupSize {
        label: "Small",
        ml: 250,
    },
    CupSize {
        label: "Medium",
        ml: 500,
    },
    CupSize {
        label: "Large",
        ml: 750,
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreathingPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub inhale: u32,
    pub hold: u32,
    pub exhale: u32,
    pub hold_after: u32,
}

pub const BREATHING_PATTERNS: [BreathingPattern; 5] = [
    BreathingPattern {
        id: "box-breathing",
        name: "Box Breathing",
        description: "Equal parts inhale, hold, exhale, and hold. Great for stress relief and focus.",
        inhale: 4,
        hold: 4,
        exhale: 4,
        hold_after: 4,
    },
    BreathingPattern {
        id: "4-7-8-breathing",
        name: "4-7-8 Breathing",
        description: "Inhale for 4, hold for 7, exhale for 8. Helps with anxiety and sleep.",
        inhale: 4,
        hold: 7,
        exhale: 8,
        hold_after: 0,
    },
    BreathingPattern {
        id: "relaxing-breath",
        name: "Relaxing Breath",
        description: "Longer exhale than inhale promotes relaxation and calmness.",
        inhale: 5,
        hold: 2,
        exhale: 6,
        hold_after: 0,
    },
    BreathingPattern {
        id: "calm",
        name: "Calm",
        description: "Balanced breathing for everyday practice.",
        inhale: 4,
        hold: 4,
        exhale: 4,
        hold_after: 0,
    },
    BreathingPattern {
        id: "energize",
        name: "Energize",
        description: "Quick in-and-out breathing for a burst of energy.",
        inhale: 4,
        hold: 0,
        exhale: 4,
        hold_after: 0,
    },
];

pub fn find_pattern(id: &str) -> Option<&'static BreathingPattern> {
    BREATHING_PATTERNS.iter().find(|pattern| pattern.id == id)
}

impl BreathingPattern {
    pub fn phase_sequence(&self) -> Result<PhaseSequence, SequenceError> {
        let stages = [
            ("inhale", self.inhale),
            ("hold", self.hold),
            ("exhale", self.exhale),
            ("hold-after", self.hold_after),
        ];
        PhaseSequence::new(
            stages
                .into_iter()
                .filter(|(_, seconds)| *seconds > 0)
                .map(|(name, seconds)| PhaseSpec::new(name, seconds))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GuidedStretch {
    pub name: &'static str,
    pub seconds: u32,
}

pub const GUIDED_STRETCHES: [GuidedStretch; 5] = [
    GuidedStretch {
        name: "Neck Stretch",
        seconds: 30,
    },
    GuidedStretch {
        name: "Shoulder Rolls",
        seconds: 45,
    },
    GuidedStretch {
        name: "Quad Stretch",
        seconds: 60,
    },
    GuidedStretch {
        name: "Hamstring Stretch",
        seconds: 60,
    },
    GuidedStretch {
        name: "Child's Pose",
        seconds: 45,
    },
];

pub fn guided_stretch_sequence() -> Result<PhaseSequence, SequenceError> {
    PhaseSequence::new(
        GUIDED_STRETCHES
            .iter()
            .map(|stretch| PhaseSpec::new(stretch.name, stretch.seconds))
            .collect(),
    )
}

fn exercise(id: &str, name: &str, seconds: u32) -> RoutineExercise {
    RoutineExercise {
        id: id.to_string(),
        name: name.to_string(),
        seconds,
        completed: false,
    }
}

pub fn default_routines() -> Vec<WorkoutRoutine> {
    vec![
        WorkoutRoutine {
            id: "upper-body".to_string(),
            name: "Upper Body".to_string(),
            exercises: vec![
                exercise("push-ups", "Push-ups", 60),
                exercise("dumbbell-rows", "Dumbbell Rows", 45),
                exercise("shoulder-press", "Shoulder Press", 45),
                exercise("bicep-curls", "Bicep Curls", 30),
                exercise("tricep-extensions", "Tricep Extensions", 30),
            ],
        },
        WorkoutRoutine {
            id: "lower-body".to_string(),
            name: "Lower Body".to_string(),
            exercises: vec![
                exercise("squats", "Squats", 60),
                exercise("lunges", "Lunges", 45),
                exercise("calf-raises", "Calf Raises", 30),
                exercise("glute-bridges", "Glute Bridges", 45),
                exercise("leg-raises", "Leg Raises", 30),
            ],
        },
        WorkoutRoutine {
            id: "core".to_string(),
            name: "Core".to_string(),
            exercises: vec![
                exercise("plank", "Plank", 60),
                exercise("crunches", "Crunches", 45),
                exercise("russian-twists", "Russian Twists", 30),
                exercise("mountain-climbers", "Mountain Climbers", 45),
                exercise("leg-raises", "Leg Raises", 30),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_builds_a_sequence() {
        for pattern in &BREATHING_PATTERNS {
            let sequence = pattern.phase_sequence().expect("pattern sequence");
            assert!(!sequence.is_empty(), "{}", pattern.id);
            assert!(sequence.phases().iter().all(|phase| phase.seconds > 0));
        }
    }

    #[test]
    fn zero_stages_are_omitted_from_built_ins() {
        let pattern = find_pattern("4-7-8-breathing").expect("known pattern");
        let sequence = pattern.phase_sequence().expect("pattern sequence");
        let names: Vec<&str> = sequence
            .phases()
            .iter()
            .map(|phase| phase.name.as_str())
            .collect();
        assert_eq!(names, ["inhale", "hold", "exhale"]);
        assert_eq!(sequence.total_seconds(), 19);

        let box_pattern = find_pattern("box-breathing").expect("known pattern");
        assert_eq!(box_pattern.phase_sequence().expect("sequence").len(), 4);
    }

    #[test]
    fn unknown_pattern_is_none() {
        assert!(find_pattern("deep-sea-breathing").is_none());
    }

    #[test]
    fn guided_stretch_sequence_totals_four_minutes() {
        let sequence = guided_stretch_sequence().expect("stretch sequence");
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.total_seconds(), 240);
    }

    #[test]
    fn default_routines_start_uncompleted_with_unique_ids() {
        let routines = default_routines();
        assert_eq!(routines.len(), 3);
        for routine in &routines {
            assert_eq!(routine.exercises.len(), 5);
            let mut ids: Vec<&str> = routine
                .exercises
                .iter()
                .map(|exercise| exercise.id.as_str())
                .collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 5, "{}", routine.id);
            assert!(routine.exercises.iter().all(|exercise| !exercise.completed));
        }
    }
}
