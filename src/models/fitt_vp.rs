use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::models::activity::Intensity;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Aerobic,
    Resistance,
    Flexibility,
    /// Balance, coordination and agility work.
    Neuromotor,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Aerobic => "aerobic",
            ExerciseType::Resistance => "resistance",
            ExerciseType::Flexibility => "flexibility",
            ExerciseType::Neuromotor => "neuromotor",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AerobicScale {
    pub hr_percentage: &'static str,
    pub rpe_scale: &'static str,
    pub talk_test: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceScale {
    #[serde(rename = "percentage1rm")]
    pub percentage_1rm: &'static str,
    pub repetitions: &'static str,
    pub rpe_scale: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTypeDefinition {
    pub exercise_type: ExerciseType,
    pub definition: &'static str,
    pub primary_benefits: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub measurements: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionStrategy {
    pub goal: &'static str,
    pub principle: &'static str,
    pub progression_rate: &'static str,
    pub sequence: &'static str,
    pub timeline: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntensityScales {
    pub level: Intensity,
    pub aerobic: &'static AerobicScale,
    pub resistance: &'static ResistanceScale,
}

/// Reference tables behind every prescription.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkReference {
    pub intensity_scales: Vec<IntensityScales>,
    pub exercise_types: &'static [ExerciseTypeDefinition],
    pub progression_strategies: &'static [ProgressionStrategy],
}

#[derive(Deserialize, Serialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FittVpRequest {
    #[validate(length(min = 1, message = "Goal cannot be empty"))]
    pub goal: String,

    pub current_fitness: FitnessLevel,

    #[validate(range(min = 1, max = 600, message = "Time available must be between 1 and 600 minutes"))]
    pub time_available: u32,

    #[validate(range(min = 1, max = 7, message = "Frequency available must be between 1 and 7 days"))]
    pub frequency_available: u32,

    #[serde(default)]
    pub limitations: Vec<String>,

    /// When present, a periodized plan of this many weeks is attached.
    #[validate(range(min = 1, max = 104, message = "Plan length must be between 1 and 104 weeks"))]
    pub weeks: Option<u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntensityPrescription {
    pub level: Intensity,
    pub aerobic: String,
    pub resistance: String,
    pub talk_test: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FittVpPrescription {
    pub frequency: String,
    pub days_per_week: u32,
    pub intensity: IntensityPrescription,
    pub time: String,
    pub minutes_per_session: u32,
    #[serde(rename = "type")]
    pub types: Vec<ExerciseType>,
    pub aerobic_emphasis: u32,
    pub volume: String,
    pub weekly_minutes: u32,
    pub progression: String,
    pub rationale: String,
    pub modifications: Vec<&'static str>,
    pub monitoring: Vec<&'static str>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPhase {
    pub name: &'static str,
    pub focus: &'static str,
    pub modifications: &'static str,
    pub key_goals: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodizedPlan {
    pub total_duration: String,
    pub phases: Vec<&'static TrainingPhase>,
    pub reassessment_points: &'static [u32],
    pub success_metrics: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FittVpResponse {
    pub prescription: FittVpPrescription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodized_plan: Option<PeriodizedPlan>,
}
