//! WHO 2020 age-specific guideline records, schedules and bracket prescriptions.

use crate::models::activity::Intensity;
use crate::models::guideline::{
    ActivityType, AgeBracket, AgeGuideline, BasePrescription, DayPlan, ExerciseActivity, Note, Weekday,
};

static CHILDREN_ADOLESCENTS: AgeGuideline = AgeGuideline {
    bracket: AgeBracket::ChildrenAdolescents,
    age_range: "5-17 years",
    key_guidelines: &[
        Note { label: "total_activity", text: "Average 60 minutes/day moderate-to-vigorous intensity" },
        Note { label: "aerobic", text: "Most of the 60+ minutes should be aerobic" },
        Note { label: "muscle_strengthening", text: "At least 3 days/week" },
        Note { label: "bone_strengthening", text: "At least 3 days/week" },
    ],
    recommended_activities: &[
        ExerciseActivity {
            name: "Active play and games",
            kind: "aerobic",
            intensity: "moderate-vigorous",
            duration: "15-30 minutes",
            frequency: "daily",
            benefits: &["Cardiovascular health", "Motor skill development", "Social interaction"],
            considerations: &["Age-appropriate", "Fun and engaging", "Variety important"],
        },
        ExerciseActivity {
            name: "Sports participation",
            kind: "aerobic + skill",
            intensity: "moderate-vigorous",
            duration: "45-60 minutes",
            frequency: "3-5 times/week",
            benefits: &["Cardiovascular fitness", "Teamwork", "Competitive skills"],
            considerations: &["Proper supervision", "Age-appropriate rules", "Injury prevention"],
        },
        ExerciseActivity {
            name: "Playground activities",
            kind: "muscle + bone strengthening",
            intensity: "moderate-vigorous",
            duration: "20-30 minutes",
            frequency: "3+ times/week",
            benefits: &["Bone density", "Muscle strength", "Coordination"],
            considerations: &["Safe equipment", "Adult supervision", "Progressive challenge"],
        },
        ExerciseActivity {
            name: "Dancing",
            kind: "aerobic + bone strengthening",
            intensity: "moderate",
            duration: "30-45 minutes",
            frequency: "2-3 times/week",
            benefits: &["Cardiovascular health", "Bone health", "Rhythm and coordination"],
            considerations: &["Age-appropriate music", "Non-competitive environment"],
        },
    ],
    focus: &[
        "Fundamental movement skills",
        "Physical literacy",
        "Enjoyment of physical activity",
        "Habit formation",
    ],
};

static ADULTS: AgeGuideline = AgeGuideline {
    bracket: AgeBracket::Adults,
    age_range: "18-64 years",
    key_guidelines: &[
        Note { label: "aerobic_moderate", text: "150-300 minutes/week" },
        Note { label: "aerobic_vigorous", text: "75-150 minutes/week" },
        Note { label: "muscle_strengthening", text: "2+ days/week, major muscle groups" },
        Note { label: "additional_benefits", text: "More than 300 min moderate OR 150 min vigorous" },
    ],
    recommended_activities: &[
        ExerciseActivity {
            name: "Brisk walking",
            kind: "aerobic",
            intensity: "moderate",
            duration: "30 minutes",
            frequency: "5 days/week",
            benefits: &["Cardiovascular health", "Weight management", "Mental health"],
            considerations: &["Comfortable shoes", "Gradual progression", "Weather appropriate"],
        },
        ExerciseActivity {
            name: "Resistance training",
            kind: "muscle strengthening",
            intensity: "moderate-vigorous",
            duration: "45-60 minutes",
            frequency: "2-3 times/week",
            benefits: &["Muscle mass", "Bone density", "Metabolic health"],
            considerations: &["Proper form", "Progressive overload", "Rest between sessions"],
        },
        ExerciseActivity {
            name: "Swimming/Water aerobics",
            kind: "aerobic",
            intensity: "moderate",
            duration: "30-45 minutes",
            frequency: "3-4 times/week",
            benefits: &["Full body workout", "Joint-friendly", "Cardiovascular fitness"],
            considerations: &["Swimming ability", "Pool access", "Water safety"],
        },
        ExerciseActivity {
            name: "Cycling",
            kind: "aerobic",
            intensity: "moderate-vigorous",
            duration: "45-60 minutes",
            frequency: "3-4 times/week",
            benefits: &["Lower body strength", "Cardiovascular health", "Low impact"],
            considerations: &["Helmet safety", "Traffic awareness", "Bike maintenance"],
        },
    ],
    focus: &[
        "Use stairs instead of elevators",
        "Walk or bike for short trips",
        "Active lunch breaks",
        "Standing desk options",
        "Weekend active recreation",
    ],
};

static OLDER_ADULTS: AgeGuideline = AgeGuideline {
    bracket: AgeBracket::OlderAdults,
    age_range: "65+ years",
    key_guidelines: &[
        Note { label: "aerobic", text: "Same as adults (150-300 min moderate OR 75-150 min vigorous)" },
        Note { label: "muscle_strengthening", text: "2+ days/week, major muscle groups" },
        Note { label: "balance_functional", text: "3+ days/week multicomponent activities" },
        Note { label: "fall_prevention", text: "Emphasis on balance and strength training" },
    ],
    recommended_activities: &[
        ExerciseActivity {
            name: "Walking programs",
            kind: "aerobic",
            intensity: "moderate",
            duration: "20-30 minutes",
            frequency: "daily",
            benefits: &["Cardiovascular health", "Bone health", "Independence"],
            considerations: &["Safe walking routes", "Appropriate footwear", "Weather conditions"],
        },
        ExerciseActivity {
            name: "Tai Chi",
            kind: "balance + flexibility",
            intensity: "light-moderate",
            duration: "30-45 minutes",
            frequency: "2-3 times/week",
            benefits: &["Balance", "Fall prevention", "Mental wellbeing", "Flexibility"],
            considerations: &["Qualified instructor", "Slow progression", "Group setting beneficial"],
        },
        ExerciseActivity {
            name: "Chair exercises",
            kind: "muscle strengthening",
            intensity: "light-moderate",
            duration: "20-30 minutes",
            frequency: "2-3 times/week",
            benefits: &["Muscle strength", "Functional capacity", "Safety"],
            considerations: &["Stable chair", "Proper form", "Individual adaptation"],
        },
        ExerciseActivity {
            name: "Water aerobics",
            kind: "aerobic + resistance",
            intensity: "moderate",
            duration: "45-60 minutes",
            frequency: "2-3 times/week",
            benefits: &["Joint mobility", "Muscle strength", "Social interaction"],
            considerations: &["Pool temperature", "Entry/exit safety", "Instructor experience"],
        },
        ExerciseActivity {
            name: "Balance training",
            kind: "balance + functional",
            intensity: "light-moderate",
            duration: "15-20 minutes",
            frequency: "3+ times/week",
            benefits: &["Fall prevention", "Confidence", "Functional mobility"],
            considerations: &["Safety support available", "Progressive difficulty", "Individual assessment"],
        },
    ],
    focus: &[
        "Activities of daily living",
        "Fall prevention strategies",
        "Maintaining independence",
        "Social engagement through activity",
        "Cognitive benefits",
    ],
};

pub fn guideline(bracket: AgeBracket) -> &'static AgeGuideline {
    match bracket {
        AgeBracket::ChildrenAdolescents => &CHILDREN_ADOLESCENTS,
        AgeBracket::Adults => &ADULTS,
        AgeBracket::OlderAdults => &OLDER_ADULTS,
    }
}

pub fn schedule(bracket: AgeBracket) -> &'static [DayPlan] {
    match bracket {
        AgeBracket::ChildrenAdolescents => &[
            DayPlan { day: Weekday::Monday, plan: "Active play (30 min) + Sports practice (30 min)" },
            DayPlan { day: Weekday::Tuesday, plan: "Playground activities (30 min) + Free play (30 min)" },
            DayPlan { day: Weekday::Wednesday, plan: "Dancing or movement (45 min) + Active games (15 min)" },
            DayPlan { day: Weekday::Thursday, plan: "Sports or structured activity (45 min) + Walking (15 min)" },
            DayPlan { day: Weekday::Friday, plan: "Active play (30 min) + Family activity (30 min)" },
            DayPlan { day: Weekday::Saturday, plan: "Longer sports activity (60-90 min)" },
            DayPlan { day: Weekday::Sunday, plan: "Family outdoor activity (60 min)" },
        ],
        AgeBracket::Adults => &[
            DayPlan { day: Weekday::Monday, plan: "Resistance training (45 min)" },
            DayPlan { day: Weekday::Tuesday, plan: "Brisk walking (30 min)" },
            DayPlan { day: Weekday::Wednesday, plan: "Resistance training (45 min) + Stretching (15 min)" },
            DayPlan { day: Weekday::Thursday, plan: "Cycling or swimming (45 min)" },
            DayPlan { day: Weekday::Friday, plan: "Brisk walking (30 min) + Flexibility (15 min)" },
            DayPlan { day: Weekday::Saturday, plan: "Longer aerobic activity (60 min)" },
            DayPlan { day: Weekday::Sunday, plan: "Active recreation or rest" },
        ],
        AgeBracket::OlderAdults => &[
            DayPlan { day: Weekday::Monday, plan: "Walking (25 min) + Balance exercises (15 min)" },
            DayPlan { day: Weekday::Tuesday, plan: "Chair exercises (30 min)" },
            DayPlan { day: Weekday::Wednesday, plan: "Tai Chi or gentle movement (30 min)" },
            DayPlan { day: Weekday::Thursday, plan: "Walking (25 min) + Strength exercises (20 min)" },
            DayPlan { day: Weekday::Friday, plan: "Water aerobics (45 min)" },
            DayPlan { day: Weekday::Saturday, plan: "Social activity with movement (30-45 min)" },
            DayPlan { day: Weekday::Sunday, plan: "Gentle stretching and relaxation (20 min)" },
        ],
    }
}

pub fn weekly_volume(bracket: AgeBracket) -> &'static str {
    match bracket {
        AgeBracket::ChildrenAdolescents => "420+ minutes moderate-to-vigorous activity",
        AgeBracket::Adults => "150-300 minutes moderate aerobic + 2 strength sessions",
        AgeBracket::OlderAdults => "150-300 minutes aerobic + 2-3 strength + 3+ balance sessions",
    }
}

pub fn progression_notes(bracket: AgeBracket) -> &'static [&'static str] {
    match bracket {
        AgeBracket::ChildrenAdolescents => &[
            "Focus on skill development and enjoyment",
            "Gradually increase activity complexity",
            "Encourage variety to prevent boredom",
            "Monitor for signs of overuse or burnout",
        ],
        AgeBracket::Adults => &[
            "Start conservatively and progress gradually",
            "Increase duration before intensity",
            "Add 10% volume increase per week maximum",
            "Listen to body and allow adequate recovery",
        ],
        AgeBracket::OlderAdults => &[
            "Progress very gradually over weeks/months",
            "Prioritize safety and fall prevention",
            "Focus on functional improvements",
            "Regular assessment of capabilities and limitations",
        ],
    }
}

static CHILDREN_PRESCRIPTION: BasePrescription = BasePrescription {
    frequency: "Daily",
    intensity: Intensity::Moderate,
    time: "Average 60 minutes/day",
    types: &[
        ActivityType::Aerobic,
        ActivityType::MuscleStrengthening,
        ActivityType::BoneStrengthening,
    ],
    volume: "420 minutes/week moderate-to-vigorous intensity",
    progression: "Muscle/bone strengthening ≥3 days/week",
    met_guidelines: &[
        Note { label: "推薦MET範圍", text: "3.0-8.0 METs (依活動類型)" },
        Note { label: "每日目標", text: "累積180-420 MET-分鐘" },
        Note { label: "活動建議", text: "多樣化運動，包含遊戲和結構化活動" },
    ],
};

static ADULT_PRESCRIPTION: BasePrescription = BasePrescription {
    frequency: "5+ days/week aerobic, 2+ days/week strength",
    intensity: Intensity::Moderate,
    time: "150-300 min moderate OR 75-150 min vigorous/week",
    types: &[ActivityType::Aerobic, ActivityType::MuscleStrengthening],
    volume: "150-300 minutes moderate intensity weekly",
    progression: "Can increase to >300 min moderate OR >150 min vigorous for additional benefits",
    met_guidelines: &[
        Note { label: "最低建議", text: "500 MET-分鐘/週 (中高強度活動)" },
        Note { label: "額外益處", text: "1000 MET-分鐘/週" },
        Note { label: "中度活動", text: "3.0-5.9 METs，如快走、騎車、游泳" },
        Note { label: "高強度活動", text: "≥6.0 METs，如跑步、競技運動" },
    ],
};

static OLDER_ADULT_PRESCRIPTION: BasePrescription = BasePrescription {
    frequency: "Same as adults + 3+ days/week multicomponent",
    intensity: Intensity::Moderate,
    time: "150-300 min moderate OR 75-150 min vigorous/week",
    types: &[
        ActivityType::Aerobic,
        ActivityType::MuscleStrengthening,
        ActivityType::Balance,
    ],
    volume: "150-300 minutes moderate intensity weekly",
    progression: "Emphasize balance and strength training to prevent falls",
    met_guidelines: &[
        Note { label: "建議範圍", text: "500-1000 MET-分鐘/週" },
        Note { label: "優先活動", text: "2.0-5.0 METs，重視安全性" },
        Note { label: "平衡訓練", text: "配合功能性活動，預防跌倒" },
        Note { label: "漸進原則", text: "從低強度開始，緩慢增加" },
    ],
};

pub fn base_prescription(bracket: AgeBracket) -> &'static BasePrescription {
    match bracket {
        AgeBracket::ChildrenAdolescents => &CHILDREN_PRESCRIPTION,
        AgeBracket::Adults => &ADULT_PRESCRIPTION,
        AgeBracket::OlderAdults => &OLDER_ADULT_PRESCRIPTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_keyed_by_their_own_bracket() {
        for bracket in AgeBracket::ALL {
            let record = guideline(bracket);
            assert_eq!(record.bracket, bracket);
            assert_eq!(record.age_range, bracket.age_range());
            assert!(!record.recommended_activities.is_empty());
        }
    }

    #[test]
    fn every_schedule_covers_the_whole_week() {
        for bracket in AgeBracket::ALL {
            let days: Vec<Weekday> = schedule(bracket).iter().map(|d| d.day).collect();
            assert_eq!(
                days,
                vec![
                    Weekday::Monday,
                    Weekday::Tuesday,
                    Weekday::Wednesday,
                    Weekday::Thursday,
                    Weekday::Friday,
                    Weekday::Saturday,
                    Weekday::Sunday,
                ]
            );
        }
    }
}
