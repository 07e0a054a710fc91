//! Special-population and chronic-condition exercise guidance.
//!
//! Only the populations and conditions with published guidance have entries;
//! `chronic_disease`, `copd`, `obesity` and `osteoporosis` are intentionally absent.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::guideline::Note;
use crate::models::population::{ChronicCondition, ConditionGuideline, PopulationGuideline, SpecialPopulation};

lazy_static! {
    pub static ref POPULATION_GUIDELINES: HashMap<SpecialPopulation, PopulationGuideline> = {
        let mut m = HashMap::new();
        m.insert(
            SpecialPopulation::Pregnancy,
            PopulationGuideline {
                population: "Pregnant Women",
                general_recommendations: "At least 150 minutes of moderate-intensity aerobic activity per week. \
                    Include aerobic and muscle-strengthening activities. \
                    Can continue pre-pregnancy activity levels if medically cleared.",
                specific_activities: &[
                    "Walking (30 min, 5 days/week)",
                    "Swimming and water aerobics",
                    "Stationary cycling",
                    "Modified strength training",
                    "Prenatal yoga",
                    "Low-impact aerobics",
                ],
                contraindications: &[
                    "Contact sports",
                    "Activities with fall risk",
                    "Scuba diving",
                    "Hot yoga/saunas",
                    "Supine exercises after first trimester",
                    "High-altitude activities (>2500m)",
                ],
                precautions: &[
                    "Monitor heart rate and exertion",
                    "Stay hydrated and avoid overheating",
                    "Modify intensity as pregnancy progresses",
                    "Stop if experiencing dizziness, chest pain, or contractions",
                    "Avoid Valsalva maneuver",
                ],
                medical_clearance: true,
                progression_notes: "Decrease intensity and duration as pregnancy progresses. \
                    Focus on maintaining fitness rather than improving.",
            },
        );
        m.insert(
            SpecialPopulation::Postpartum,
            PopulationGuideline {
                population: "Postpartum Women",
                general_recommendations: "Gradually return to pre-pregnancy activity levels. \
                    Start with low-intensity activities and progress slowly. \
                    Focus on core and pelvic floor rehabilitation.",
                specific_activities: &[
                    "Walking (start 10-15 min, progress gradually)",
                    "Pelvic floor exercises",
                    "Core rehabilitation exercises",
                    "Gentle yoga or stretching",
                    "Swimming (after 6-8 weeks)",
                    "Gradual return to strength training",
                ],
                contraindications: &[
                    "High-impact activities until cleared",
                    "Heavy lifting initially",
                    "Intense abdominal exercises with diastasis recti",
                ],
                precautions: &[
                    "Medical clearance before resuming exercise",
                    "Consider breastfeeding and nutrition needs",
                    "Monitor for fatigue and allow adequate recovery",
                    "Address any pelvic floor dysfunction",
                ],
                medical_clearance: true,
                progression_notes: "Very gradual progression over 12-16 weeks. \
                    Listen to body and adjust for sleep deprivation and recovery.",
            },
        );
        m.insert(
            SpecialPopulation::Disability,
            PopulationGuideline {
                population: "People with Disabilities",
                general_recommendations: "Follow general population guidelines when possible. \
                    Adapt activities to individual capabilities and limitations. \
                    Benefits generally outweigh risks when properly prescribed.",
                specific_activities: &[
                    "Wheelchair sports and activities",
                    "Adaptive swimming",
                    "Seated exercises",
                    "Resistance training with modifications",
                    "Balance training (as appropriate)",
                    "Recreational activities adapted to ability",
                ],
                contraindications: &[
                    "Activities beyond individual capabilities",
                    "Exercises that worsen existing conditions",
                    "Unsafe environmental conditions",
                ],
                precautions: &[
                    "Individual assessment essential",
                    "Consider cognitive and physical limitations",
                    "Ensure proper equipment and safety measures",
                    "Regular monitoring and adaptation",
                ],
                medical_clearance: true,
                progression_notes: "Highly individualized progression based on specific disability and capabilities. \
                    Focus on functional improvements.",
            },
        );
        m.insert(
            SpecialPopulation::Sedentary,
            PopulationGuideline {
                population: "Sedentary Individuals",
                general_recommendations: "Start with small amounts and gradually increase. \
                    Some physical activity is better than none. \
                    Focus on building habits and enjoyment.",
                specific_activities: &[
                    "Walking (start 5-10 min, 2-3 times/day)",
                    "Gentle stretching",
                    "Chair exercises",
                    "Household activities",
                    "Gardening",
                    "Dancing to music",
                ],
                contraindications: &[
                    "Starting too intensely",
                    "Ignoring pain or discomfort",
                    "All-or-nothing approach",
                ],
                precautions: &[
                    "Very gradual progression",
                    "Monitor for unusual fatigue or pain",
                    "Start with activities of daily living",
                    "Build confidence before intensity",
                ],
                medical_clearance: false,
                progression_notes: "Increase duration before intensity. Add 2-5 minutes per week. \
                    Celebrate small victories.",
            },
        );
        m
    };

    pub static ref CONDITION_GUIDELINES: HashMap<ChronicCondition, ConditionGuideline> = {
        let mut m = HashMap::new();
        m.insert(
            ChronicCondition::Diabetes,
            ConditionGuideline {
                exercise_benefits: &[
                    "Improved glucose control",
                    "Enhanced insulin sensitivity",
                    "Reduced cardiovascular risk",
                    "Weight management",
                ],
                recommendations: &[
                    Note { label: "aerobic", text: "150+ min/week moderate intensity" },
                    Note { label: "resistance", text: "2-3 sessions/week" },
                    Note { label: "flexibility", text: "Daily stretching" },
                ],
                precautions: &[
                    "Monitor blood glucose before/after exercise",
                    "Carry quick-acting carbohydrates",
                    "Check feet daily for injuries",
                    "Stay hydrated",
                ],
                contraindications: &[
                    "Severe hypoglycemia history",
                    "Uncontrolled blood pressure",
                    "Active diabetic retinopathy",
                    "Recent diabetic ketoacidosis",
                ],
            },
        );
        m.insert(
            ChronicCondition::Hypertension,
            ConditionGuideline {
                exercise_benefits: &[
                    "Reduced blood pressure",
                    "Improved cardiovascular health",
                    "Enhanced medication effectiveness",
                    "Stress reduction",
                ],
                recommendations: &[
                    Note { label: "aerobic", text: "150+ min/week moderate intensity" },
                    Note { label: "resistance", text: "2-3 sessions/week, moderate intensity" },
                    Note { label: "avoid", text: "Isometric exercises, breath holding" },
                ],
                precautions: &[
                    "Monitor blood pressure response",
                    "Avoid sudden position changes",
                    "Gradual warm-up and cool-down",
                    "Medication timing considerations",
                ],
                contraindications: &[
                    "Uncontrolled hypertension (>180/110)",
                    "Recent heart attack or stroke",
                    "Unstable angina",
                ],
            },
        );
        m.insert(
            ChronicCondition::HeartDisease,
            ConditionGuideline {
                exercise_benefits: &[
                    "Improved cardiovascular function",
                    "Reduced symptoms",
                    "Enhanced quality of life",
                    "Reduced mortality risk",
                ],
                recommendations: &[
                    Note { label: "supervised", text: "Initial cardiac rehabilitation program" },
                    Note { label: "aerobic", text: "30-60 min, 3-5 days/week" },
                    Note { label: "intensity", text: "40-80% heart rate reserve" },
                ],
                precautions: &[
                    "Medical supervision initially",
                    "Heart rate monitoring",
                    "Symptom awareness (chest pain, dyspnea)",
                    "Medication effects on heart rate",
                ],
                contraindications: &[
                    "Unstable angina",
                    "Uncompensated heart failure",
                    "Severe aortic stenosis",
                    "Acute myocarditis",
                ],
            },
        );
        m.insert(
            ChronicCondition::Arthritis,
            ConditionGuideline {
                exercise_benefits: &[
                    "Reduced joint pain and stiffness",
                    "Improved function and mobility",
                    "Stronger muscles around joints",
                    "Better balance and coordination",
                ],
                recommendations: &[
                    Note { label: "low_impact", text: "Swimming, cycling, walking" },
                    Note { label: "strength", text: "2-3 times/week" },
                    Note { label: "flexibility", text: "Daily range of motion" },
                    Note { label: "duration", text: "Start with 10-15 min sessions" },
                ],
                precautions: &[
                    "Avoid high-impact activities during flares",
                    "Modify exercises based on affected joints",
                    "Use proper joint protection techniques",
                    "Balance activity with rest",
                ],
                contraindications: &[
                    "Acute joint inflammation",
                    "Severe joint damage",
                    "Recent joint surgery",
                ],
            },
        );
        m
    };
}

pub static STARTER_STAGES: &[Note] = &[
    Note { label: "week_1_2", text: "10-15 minutes light activity, 3 days/week" },
    Note { label: "week_3_4", text: "15-20 minutes light activity, 4 days/week" },
    Note { label: "week_5_8", text: "20-30 minutes moderate activity, 4-5 days/week" },
];

pub const STARTER_PROGRESSION_RULE: &str = "Increase duration by 2-5 minutes per week";

pub fn starter_modifications(population: SpecialPopulation) -> Option<&'static [&'static str]> {
    match population {
        SpecialPopulation::Pregnancy => Some(&[
            "Monitor exertion level (able to hold conversation)",
            "Avoid supine positions after 1st trimester",
            "Adjust as pregnancy progresses",
        ]),
        SpecialPopulation::Disability => Some(&[
            "Adapt all activities to individual capabilities",
            "Focus on functional movements",
            "Use assistive devices as needed",
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chronic_disease_population_has_no_entry() {
        assert_eq!(POPULATION_GUIDELINES.len(), 4);
        assert!(!POPULATION_GUIDELINES.contains_key(&SpecialPopulation::ChronicDisease));
    }

    #[test]
    fn only_four_conditions_are_documented() {
        for condition in [ChronicCondition::Copd, ChronicCondition::Obesity, ChronicCondition::Osteoporosis] {
            assert!(!CONDITION_GUIDELINES.contains_key(&condition));
        }
        assert_eq!(CONDITION_GUIDELINES.len(), 4);
    }

    #[test]
    fn sedentary_needs_no_medical_clearance() {
        assert!(!POPULATION_GUIDELINES[&SpecialPopulation::Sedentary].medical_clearance);
        assert!(POPULATION_GUIDELINES[&SpecialPopulation::Pregnancy].medical_clearance);
    }
}
