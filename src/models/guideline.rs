use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::AppError;
use crate::models::activity::Intensity;
use crate::models::education::MetExplanation;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    ChildrenAdolescents,
    Adults,
    OlderAdults,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 3] = [
        AgeBracket::ChildrenAdolescents,
        AgeBracket::Adults,
        AgeBracket::OlderAdults,
    ];

    pub fn from_age(age: i32) -> Self {
        if age <= 17 {
            AgeBracket::ChildrenAdolescents
        } else if age <= 64 {
            AgeBracket::Adults
        } else {
            AgeBracket::OlderAdults
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AgeBracket::ChildrenAdolescents => "children_adolescents",
            AgeBracket::Adults => "adults",
            AgeBracket::OlderAdults => "older_adults",
        }
    }

    pub fn age_range(&self) -> &'static str {
        match self {
            AgeBracket::ChildrenAdolescents => "5-17 years",
            AgeBracket::Adults => "18-64 years",
            AgeBracket::OlderAdults => "65+ years",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AgeBracket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        AgeBracket::ALL
            .into_iter()
            .find(|bracket| bracket.key() == key)
            .ok_or_else(|| AppError::NotFound(format!("Unknown age bracket '{}'", s)))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Note {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseActivity {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub intensity: &'static str,
    pub duration: &'static str,
    pub frequency: &'static str,
    pub benefits: &'static [&'static str],
    pub considerations: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgeGuideline {
    pub bracket: AgeBracket,
    pub age_range: &'static str,
    pub key_guidelines: &'static [Note],
    pub recommended_activities: &'static [ExerciseActivity],
    /// Development, lifestyle or functional focus depending on the bracket.
    pub focus: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub day: Weekday,
    pub plan: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub age_group: &'static str,
    pub weekly_schedule: &'static [DayPlan],
    pub total_weekly_volume: &'static str,
    pub progression_notes: &'static [&'static str],
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Aerobic,
    MuscleStrengthening,
    BoneStrengthening,
    Balance,
    Flexibility,
}

/// Bracket-level FITT-VP prescription.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasePrescription {
    pub frequency: &'static str,
    pub intensity: Intensity,
    pub time: &'static str,
    #[serde(rename = "type")]
    pub types: &'static [ActivityType],
    pub volume: &'static str,
    pub progression: &'static str,
    pub met_guidelines: &'static [Note],
}

fn default_health_status() -> String {
    "healthy".to_string()
}

fn default_fitness_level() -> String {
    "beginner".to_string()
}

#[derive(Deserialize, Serialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRequest {
    #[validate(range(min = 5, max = 120, message = "Age must be between 5 and 120"))]
    pub age: i32,

    pub body_weight_kg: f64,

    #[serde(default = "default_health_status")]
    pub health_status: String,

    #[serde(default = "default_fitness_level")]
    pub fitness_level: String,
}

impl PrescriptionRequest {
    pub fn new(age: i32, body_weight_kg: f64) -> Self {
        Self {
            age,
            body_weight_kg,
            health_status: default_health_status(),
            fitness_level: default_fitness_level(),
        }
    }

    pub fn bracket(&self) -> AgeBracket {
        AgeBracket::from_age(self.age)
    }

    pub fn is_healthy(&self) -> bool {
        self.health_status == "healthy"
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampleActivity {
    pub activity: &'static str,
    pub met_value: f64,
    pub calories_30min: f64,
    pub examples: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualPrescription {
    pub age_group: &'static str,
    pub base_prescription: &'static BasePrescription,
    pub met_explanation: &'static MetExplanation,
    pub recommended_activities: Vec<SampleActivity>,
    pub modifications: Vec<&'static str>,
    pub safety_considerations: Vec<&'static str>,
}
