use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::guideline::Note;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpecialPopulation {
    Pregnancy,
    Postpartum,
    ChronicDisease,
    Disability,
    Sedentary,
}

impl SpecialPopulation {
    pub const ALL: [SpecialPopulation; 5] = [
        SpecialPopulation::Pregnancy,
        SpecialPopulation::Postpartum,
        SpecialPopulation::ChronicDisease,
        SpecialPopulation::Disability,
        SpecialPopulation::Sedentary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SpecialPopulation::Pregnancy => "pregnancy",
            SpecialPopulation::Postpartum => "postpartum",
            SpecialPopulation::ChronicDisease => "chronic_disease",
            SpecialPopulation::Disability => "disability",
            SpecialPopulation::Sedentary => "sedentary",
        }
    }
}

impl FromStr for SpecialPopulation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SpecialPopulation::ALL
            .into_iter()
            .find(|population| population.key() == key)
            .ok_or_else(|| AppError::NotFound(format!("Unknown population '{}'", s)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChronicCondition {
    Diabetes,
    Hypertension,
    HeartDisease,
    Arthritis,
    Copd,
    Obesity,
    Osteoporosis,
}

impl ChronicCondition {
    pub const ALL: [ChronicCondition; 7] = [
        ChronicCondition::Diabetes,
        ChronicCondition::Hypertension,
        ChronicCondition::HeartDisease,
        ChronicCondition::Arthritis,
        ChronicCondition::Copd,
        ChronicCondition::Obesity,
        ChronicCondition::Osteoporosis,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChronicCondition::Diabetes => "diabetes",
            ChronicCondition::Hypertension => "hypertension",
            ChronicCondition::HeartDisease => "heart_disease",
            ChronicCondition::Arthritis => "arthritis",
            ChronicCondition::Copd => "copd",
            ChronicCondition::Obesity => "obesity",
            ChronicCondition::Osteoporosis => "osteoporosis",
        }
    }
}

impl FromStr for ChronicCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ChronicCondition::ALL
            .into_iter()
            .find(|condition| condition.key() == key)
            .ok_or_else(|| AppError::NotFound(format!("Unknown chronic condition '{}'", s)))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PopulationGuideline {
    pub population: &'static str,
    pub general_recommendations: &'static str,
    pub specific_activities: &'static [&'static str],
    pub contraindications: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub medical_clearance: bool,
    pub progression_notes: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionGuideline {
    pub exercise_benefits: &'static [&'static str],
    pub recommendations: &'static [Note],
    pub precautions: &'static [&'static str],
    pub contraindications: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSection {
    pub condition: ChronicCondition,
    pub benefits: &'static [&'static str],
    pub specific_recommendations: &'static [Note],
    pub additional_precautions: &'static [&'static str],
    pub additional_contraindications: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarterProgram {
    pub stages: &'static [Note],
    pub progression_rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifications: Option<&'static [&'static str]>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedPrescription {
    pub population: &'static str,
    pub age_group: &'static str,
    pub medical_clearance_required: bool,
    pub general_recommendations: &'static str,
    pub recommended_activities: &'static [&'static str],
    pub contraindications: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub progression: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronic_condition: Option<ConditionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_program: Option<StarterProgram>,
}
