//! ACSM FITT-VP reference tables: intensity scales, exercise types and progression.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::activity::Intensity;
use crate::models::fitt_vp::{
    AerobicScale, ExerciseType, ExerciseTypeDefinition, ProgressionStrategy, ResistanceScale, TrainingPhase,
};

pub const DEFAULT_PROGRESSION_GOAL: &str = "general_health";

pub fn aerobic_scale(level: Intensity) -> &'static AerobicScale {
    match level {
        Intensity::Light => &AerobicScale {
            hr_percentage: "40-54% HRmax",
            rpe_scale: "2-3 (6-20 scale) or 1-2 (0-10 scale)",
            talk_test: "Can sing while exercising",
            examples: &["Slow walking", "Light household tasks"],
        },
        Intensity::Moderate => &AerobicScale {
            hr_percentage: "55-69% HRmax",
            rpe_scale: "4-6 (6-20 scale) or 3-4 (0-10 scale)",
            talk_test: "Can talk but not sing",
            examples: &["Brisk walking", "Water aerobics", "Ballroom dancing"],
        },
        Intensity::Vigorous => &AerobicScale {
            hr_percentage: "70-85% HRmax",
            rpe_scale: "7-8 (6-20 scale) or 5-6 (0-10 scale)",
            talk_test: "Can only speak few words without pausing",
            examples: &["Jogging/running", "Swimming laps", "Basketball"],
        },
    }
}

pub fn resistance_scale(level: Intensity) -> &'static ResistanceScale {
    match level {
        Intensity::Light => &ResistanceScale {
            percentage_1rm: "40-50% 1RM",
            repetitions: "15-20 reps",
            rpe_scale: "2-3 (6-20 scale)",
            examples: &["Bodyweight exercises", "Light weights"],
        },
        Intensity::Moderate => &ResistanceScale {
            percentage_1rm: "60-70% 1RM",
            repetitions: "8-12 reps",
            rpe_scale: "4-6 (6-20 scale)",
            examples: &["Moderate weight training", "Resistance bands"],
        },
        Intensity::Vigorous => &ResistanceScale {
            percentage_1rm: "75-85% 1RM",
            repetitions: "6-8 reps",
            rpe_scale: "7-8 (6-20 scale)",
            examples: &["Heavy weight training", "Power lifting"],
        },
    }
}

pub static EXERCISE_TYPES: &[ExerciseTypeDefinition] = &[
    ExerciseTypeDefinition {
        exercise_type: ExerciseType::Aerobic,
        definition: "Rhythmic, continuous activities using large muscle groups",
        primary_benefits: &["Cardiovascular health", "Endurance", "Weight management", "Mental health"],
        examples: &["Walking/jogging", "Swimming", "Cycling", "Dancing", "Group fitness classes"],
        measurements: &["Heart rate", "RPE", "Duration", "Distance"],
    },
    ExerciseTypeDefinition {
        exercise_type: ExerciseType::Resistance,
        definition: "Activities that improve muscular strength and endurance",
        primary_benefits: &["Muscle strength", "Bone density", "Metabolic health", "Functional capacity"],
        examples: &["Weight lifting", "Bodyweight exercises", "Resistance bands", "Functional training"],
        measurements: &["Weight", "Repetitions", "Sets", "RPE"],
    },
    ExerciseTypeDefinition {
        exercise_type: ExerciseType::Flexibility,
        definition: "Activities that maintain or improve range of motion",
        primary_benefits: &["Joint mobility", "Injury prevention", "Muscle relaxation", "Posture improvement"],
        examples: &["Static stretching", "Dynamic stretching", "Yoga", "Tai Chi"],
        measurements: &["Range of motion", "Hold time", "Frequency"],
    },
    ExerciseTypeDefinition {
        exercise_type: ExerciseType::Neuromotor,
        definition: "Activities that improve balance, coordination, and agility",
        primary_benefits: &["Fall prevention", "Functional mobility", "Coordination", "Proprioception"],
        examples: &["Balance training", "Tai Chi", "Yoga", "Functional movements"],
        measurements: &["Balance tests", "Coordination assessments", "Function scores"],
    },
];

pub static PROGRESSION_STRATEGIES: &[ProgressionStrategy] = &[
    ProgressionStrategy {
        goal: "general_health",
        principle: "Gradual increase in volume before intensity",
        progression_rate: "5-10% increase per week",
        sequence: "Frequency → Time → Intensity → Type complexity",
        timeline: "Progress over 4-6 weeks per level",
    },
    ProgressionStrategy {
        goal: "weight_loss",
        principle: "Emphasize caloric expenditure and sustainability",
        progression_rate: "10-15% volume increase per week",
        sequence: "Time → Frequency → Intensity",
        timeline: "Focus on consistency over 12+ weeks",
    },
    ProgressionStrategy {
        goal: "strength_building",
        principle: "Progressive overload with adequate recovery",
        progression_rate: "2.5-5% load increase when completing target reps",
        sequence: "Reps → Weight → Sets → Exercise complexity",
        timeline: "2-4 week cycles with deload weeks",
    },
    ProgressionStrategy {
        goal: "endurance",
        principle: "Build aerobic base before intensity work",
        progression_rate: "10% time/distance increase per week",
        sequence: "Time → Frequency → Intensity → Sport-specific",
        timeline: "Base building 8-12 weeks, then intensity phases",
    },
    ProgressionStrategy {
        goal: "rehabilitation",
        principle: "Pain-free range of motion before strengthening",
        progression_rate: "Conservative 5% increases",
        sequence: "Range of motion → Strength → Functional movements",
        timeline: "Individual based on healing and response",
    },
];

lazy_static! {
    pub static ref PROGRESSION_BY_GOAL: HashMap<&'static str, &'static ProgressionStrategy> =
        PROGRESSION_STRATEGIES.iter().map(|s| (s.goal, s)).collect();
}

pub static FOUNDATION_PHASES: &[TrainingPhase] = &[
    TrainingPhase {
        name: "Phase 1 (Weeks 1-4): Foundation",
        focus: "Establish exercise habit and base fitness",
        modifications: "Reduce intensity by 10-20% from prescription",
        key_goals: &["Consistency", "Proper form", "Recovery adaptation"],
    },
    TrainingPhase {
        name: "Phase 2 (Weeks 5-8): Development",
        focus: "Follow full prescription parameters",
        modifications: "Implement full FITT-VP prescription",
        key_goals: &["Progressive overload", "Skill development", "Increased volume"],
    },
    TrainingPhase {
        name: "Phase 3 (Weeks 9-12): Optimization",
        focus: "Enhance performance and maintenance",
        modifications: "Increase intensity or add complexity",
        key_goals: &["Performance gains", "Goal achievement", "Long-term planning"],
    },
];

/// Appended when a plan runs past twelve weeks.
pub static MAINTENANCE_PHASE: TrainingPhase = TrainingPhase {
    name: "Phase 4 (Weeks 13+): Maintenance/Specialization",
    focus: "Maintain gains or specialize based on new goals",
    modifications: "Adjust based on outcomes and new objectives",
    key_goals: &["Maintenance", "New challenges", "Lifestyle integration"],
};

pub static REASSESSMENT_WEEKS: &[u32] = &[4, 8, 12];

pub static SUCCESS_METRICS: &[&str] = &[
    "Adherence rate (target: >80%)",
    "RPE progression (should decrease for same workload)",
    "Functional improvements",
    "Goal-specific outcomes",
];

pub static BASE_MONITORING: &[&str] = &[
    "Track RPE (Rate of Perceived Exertion) each session",
    "Monitor weekly volume progression",
    "Assess recovery between sessions",
    "Record functional improvements",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_index_holds_every_strategy() {
        assert_eq!(PROGRESSION_BY_GOAL.len(), PROGRESSION_STRATEGIES.len());
        assert!(PROGRESSION_BY_GOAL.contains_key(DEFAULT_PROGRESSION_GOAL));
    }

    #[test]
    fn scales_exist_for_every_intensity() {
        for level in Intensity::ALL {
            assert!(aerobic_scale(level).hr_percentage.ends_with("HRmax"));
            assert!(resistance_scale(level).percentage_1rm.ends_with("1RM"));
        }
    }
}
