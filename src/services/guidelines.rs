use log::debug;

use crate::data::age_guidelines;
use crate::data::met_education::MET_EXPLANATION;
use crate::models::education::MetExplanation;
use crate::models::guideline::{
    AgeBracket, AgeGuideline, IndividualPrescription, PrescriptionRequest, SampleActivity, WeeklySchedule,
};
use crate::services::energy::{calculate_expenditure, get_activities_by_intensity, round_to_tenth};

const SAMPLE_ACTIVITY_COUNT: usize = 3;
const SAMPLE_MINUTES: u32 = 30;

pub fn get_recommendations(bracket: AgeBracket) -> &'static AgeGuideline {
    debug!("Looking up guideline record for {}", bracket);
    age_guidelines::guideline(bracket)
}

pub fn get_recommendations_for_age(age: i32) -> &'static AgeGuideline {
    get_recommendations(AgeBracket::from_age(age))
}

pub fn met_guidelines_explanation() -> &'static MetExplanation {
    &MET_EXPLANATION
}

pub fn create_weekly_schedule(age: i32) -> WeeklySchedule {
    let bracket = AgeBracket::from_age(age);
    WeeklySchedule {
        age_group: bracket.age_range(),
        weekly_schedule: age_guidelines::schedule(bracket),
        total_weekly_volume: age_guidelines::weekly_volume(bracket),
        progression_notes: age_guidelines::progression_notes(bracket),
    }
}

fn modifications(request: &PrescriptionRequest) -> Vec<&'static str> {
    let mut modifications = Vec::new();

    if request.fitness_level == "beginner" {
        modifications.extend([
            "Start with lower end of time recommendations",
            "Progress gradually over 4-6 weeks",
            "Focus on enjoyable activities to build habit",
        ]);
    }

    if !request.is_healthy() {
        modifications.extend([
            "Consult healthcare provider before starting",
            "Consider supervised exercise initially",
            "Monitor symptoms during activity",
        ]);
    }

    modifications
}

fn safety_considerations(bracket: AgeBracket, healthy: bool) -> Vec<&'static str> {
    let mut safety = vec!["Warm up before and cool down after exercise"];

    if bracket == AgeBracket::OlderAdults {
        safety.extend([
            "Include fall prevention exercises",
            "Start slowly and progress gradually",
            "Consider balance training priority",
        ]);
    }

    if !healthy {
        safety.extend([
            "Medical clearance recommended",
            "Monitor for adverse symptoms",
            "Have emergency plan in place",
        ]);
    }

    safety
}

/// Bracket prescription plus sample activities costed at the caller's body weight.
pub fn create_individualized_prescription(request: &PrescriptionRequest) -> IndividualPrescription {
    let bracket = request.bracket();
    let base = age_guidelines::base_prescription(bracket);

    let recommended_activities = get_activities_by_intensity(base.intensity)
        .into_iter()
        .take(SAMPLE_ACTIVITY_COUNT)
        .map(|activity| SampleActivity {
            activity: activity.name,
            met_value: activity.met_value,
            calories_30min: round_to_tenth(calculate_expenditure(
                request.body_weight_kg,
                activity.met_value,
                SAMPLE_MINUTES,
            )),
            examples: activity.examples,
        })
        .collect();

    IndividualPrescription {
        age_group: bracket.key(),
        base_prescription: base,
        met_explanation: met_guidelines_explanation(),
        recommended_activities,
        modifications: modifications(request),
        safety_considerations: safety_considerations(bracket, request.is_healthy()),
    }
}
