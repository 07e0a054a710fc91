use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::activity::Intensity;
use crate::models::guideline::SampleActivity;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Hypertension,
    Diabetes,
    Arthritis,
    HeartRecovery,
    Sarcopenia,
    CancerRecovery,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Limitation {
    Pain,
    FallRisk,
    Balance,
    Palpitation,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseHabit {
    #[serde(rename = "none")]
    Inactive,
    Light,
    Moderate,
    Active,
    StudentAthlete,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Adolescent,
    Adult,
    Senior,
}

impl AgeGroup {
    /// Questionnaire ages start at 6, so anything younger is treated as a child.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=11 => AgeGroup::Child,
            12..=17 => AgeGroup::Adolescent,
            18..=64 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }

    pub fn is_minor(&self) -> bool {
        matches!(self, AgeGroup::Child | AgeGroup::Adolescent)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlanIntensity {
    Light,
    LightModerate,
    Moderate,
    ModerateVigorous,
}

impl PlanIntensity {
    pub fn label_zh(&self) -> &'static str {
        match self {
            PlanIntensity::Light => "輕度強度",
            PlanIntensity::LightModerate => "輕度至中度強度",
            PlanIntensity::Moderate => "中度強度",
            PlanIntensity::ModerateVigorous => "中度至劇烈強度",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    MildObesity,
    ModerateObesity,
    SevereObesity,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.0 {
            BmiCategory::Normal
        } else if bmi < 27.0 {
            BmiCategory::Overweight
        } else if bmi < 30.0 {
            BmiCategory::MildObesity
        } else if bmi < 35.0 {
            BmiCategory::ModerateObesity
        } else {
            BmiCategory::SevereObesity
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "體重過輕",
            BmiCategory::Normal => "正常範圍",
            BmiCategory::Overweight => "體重過重",
            BmiCategory::MildObesity => "輕度肥胖",
            BmiCategory::ModerateObesity => "中度肥胖",
            BmiCategory::SevereObesity => "重度肥胖",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
    pub label: &'static str,
}

#[derive(Deserialize, Serialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfile {
    #[validate(range(min = 6, max = 120, message = "Age must be between 6 and 120"))]
    pub age: u32,

    pub gender: Gender,

    #[validate(range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm"))]
    pub height_cm: f64,

    #[validate(range(min = 20.0, max = 300.0, message = "Weight must be between 20 and 300 kg"))]
    pub weight_kg: f64,

    #[serde(default)]
    pub diseases: Vec<Disease>,

    pub fitness_level: FitnessRating,

    pub exercise_habit: ExerciseHabit,

    #[serde(default)]
    pub limitations: Vec<Limitation>,
}

impl PersonalProfile {
    pub fn has_disease(&self, disease: Disease) -> bool {
        self.diseases.contains(&disease)
    }

    pub fn has_limitation(&self, limitation: Limitation) -> bool {
        self.limitations.contains(&limitation)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedActivities {
    pub intensity: Intensity,
    pub met_range: &'static str,
    pub activities: Vec<SampleActivity>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalPlan {
    pub age_group: AgeGroup,
    /// Sessions per week; 7 means daily.
    pub frequency: u32,
    pub intensity: PlanIntensity,
    /// Minutes per session.
    pub time: u32,
    #[serde(rename = "type")]
    pub types: Vec<&'static str>,
    /// MET-minutes per week; 0 for minors, whose target is daily minutes.
    pub volume: u32,
    pub progression: &'static str,
    pub warnings: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub bmi: Option<BmiReading>,
    pub suggested_activities: SuggestedActivities,
    pub exercise_examples: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_categories_use_local_cutoffs() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(27.0), BmiCategory::MildObesity);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ModerateObesity);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::SevereObesity);
    }

    #[test]
    fn age_groups_split_minors() {
        assert_eq!(AgeGroup::from_age(6), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Adolescent);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(65), AgeGroup::Senior);
        assert!(AgeGroup::from_age(17).is_minor());
        assert!(!AgeGroup::from_age(30).is_minor());
    }

    #[test]
    fn profile_deserializes_questionnaire_values() {
        let profile: PersonalProfile = serde_json::from_str(
            r#"{
                "age": 45, "gender": "female", "heightCm": 160.0, "weightKg": 70.0,
                "diseases": ["heart_recovery"], "fitnessLevel": "fair",
                "exerciseHabit": "none", "limitations": ["fall_risk"]
            }"#,
        )
        .unwrap();
        assert!(profile.has_disease(Disease::HeartRecovery));
        assert!(profile.has_limitation(Limitation::FallRisk));
        assert_eq!(profile.exercise_habit, ExerciseHabit::Inactive);
        assert!(profile.validate().is_ok());
    }
}
