//! Personal FITT-VP plan built from the health questionnaire.
//!
//! Adjustments are applied in a fixed order (age, fitness, BMI, diseases,
//! limitations, habit) and later steps may override earlier ones.

use log::debug;

use crate::data::exercise_examples::{examples_for, MAX_EXAMPLES};
use crate::models::activity::Intensity;
use crate::models::guideline::SampleActivity;
use crate::models::profile::{
    AgeGroup, BmiCategory, BmiReading, Disease, ExerciseHabit, FitnessRating, Limitation, PersonalPlan,
    PersonalProfile, PlanIntensity, SuggestedActivities,
};
use crate::services::energy::{calculate_expenditure, get_activities_by_intensity, round_to_tenth};

const AEROBIC: &str = "有氧運動";
const SUGGESTED_ACTIVITY_COUNT: usize = 3;

/// Working state while the questionnaire adjustments are applied.
struct Draft {
    frequency: u32,
    intensity: PlanIntensity,
    time: u32,
    types: Vec<&'static str>,
    volume: u32,
    progression: &'static str,
    warnings: Vec<&'static str>,
    recommendations: Vec<&'static str>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            frequency: 3,
            intensity: PlanIntensity::Moderate,
            time: 30,
            types: Vec::new(),
            volume: 450,
            progression: "每2-4週增加10%運動時間或頻率",
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

pub fn bmi_reading(profile: &PersonalProfile) -> Option<BmiReading> {
    if AgeGroup::from_age(profile.age).is_minor() {
        return None;
    }
    let height_m = profile.height_cm / 100.0;
    let value = round_to_tenth(profile.weight_kg / (height_m * height_m));
    let category = BmiCategory::from_bmi(value);
    Some(BmiReading {
        value,
        category,
        label: category.label_zh(),
    })
}

fn apply_age_base(draft: &mut Draft, group: AgeGroup) {
    match group {
        AgeGroup::Child => {
            draft.frequency = 7;
            draft.time = 60;
            draft.intensity = PlanIntensity::ModerateVigorous;
            draft.types = vec!["自由遊戲", "體能遊戲", "基礎運動技能"];
            draft.volume = 0;
            draft.progression = "逐漸增加活動的複雜性和技能挑戰";
            draft.recommendations.extend([
                "重點在趣味性和多樣性，而非競技表現",
                "包含骨骼強化活動，每週至少3次",
                "包含肌肉強化活動，每週至少3次",
            ]);
            draft.warnings.push("避免過度專項化訓練");
        }
        AgeGroup::Adolescent => {
            draft.frequency = 7;
            draft.time = 60;
            draft.intensity = PlanIntensity::ModerateVigorous;
            draft.types = vec![AEROBIC, "肌力訓練", "團體運動"];
            draft.volume = 0;
            draft.progression = "每2-3週增加運動強度或技能難度";
            draft.recommendations.extend(["每週至少3次劇烈強度有氧運動", "每週至少3次肌肉和骨骼強化活動"]);
            draft.warnings.push("注意運動傷害預防和適當休息");
        }
        AgeGroup::Adult => {
            draft.frequency = 4;
            draft.time = 38;
            draft.intensity = PlanIntensity::Moderate;
            draft.types.extend([AEROBIC, "肌力訓練"]);
            draft.volume = 500;
            draft.recommendations.push("每週至少2次肌力訓練");
        }
        AgeGroup::Senior => {
            draft.frequency = draft.frequency.max(3);
            draft.types.extend(["平衡訓練", "跌倒預防"]);
            draft.warnings.push("高齡使用者請特別注意運動安全");
            draft.recommendations.push("每週至少2次平衡訓練");
        }
    }
}

fn apply_adult_fitness(draft: &mut Draft, fitness: FitnessRating) {
    match fitness {
        FitnessRating::Poor => {
            draft.frequency = 3;
            draft.time = 15;
            draft.intensity = PlanIntensity::Light;
            draft.volume = 225;
            draft.progression = "每4週增加5-10%運動時間";
        }
        FitnessRating::Fair => {
            draft.frequency = 3;
            draft.time = 20;
            draft.intensity = PlanIntensity::LightModerate;
            draft.volume = 300;
        }
        FitnessRating::Good => {
            draft.frequency = 4;
            draft.time = 35;
            draft.volume = 525;
        }
        FitnessRating::Excellent => {
            draft.frequency = 5;
            draft.time = 45;
            draft.volume = 675;
        }
    }
}

/// Minors keep daily activity; fitness only sets a floor on session length.
fn apply_minor_fitness(draft: &mut Draft, fitness: FitnessRating) {
    match fitness {
        FitnessRating::Poor => {
            draft.time = draft.time.max(30);
            draft.recommendations.push("可分段進行，如每次10-15分鐘，分2-3次完成");
        }
        FitnessRating::Fair => draft.time = draft.time.max(45),
        FitnessRating::Good => draft.time = draft.time.max(60),
        FitnessRating::Excellent => {
            draft.time = draft.time.max(75);
            draft.recommendations.push("可增加運動技能挑戰和競技元素");
        }
    }
}

fn apply_bmi(draft: &mut Draft, bmi: f64) {
    if bmi < 18.5 {
        draft.recommendations.push("體重過輕：建議增加肌力訓練，配合適當營養補充");
        draft.types.push("肌力訓練重點");
    } else if (24.0..27.0).contains(&bmi) {
        draft.recommendations.push("體重過重：建議增加有氧運動頻率，控制飲食");
        draft.frequency = (draft.frequency + 1).min(6);
    } else if bmi >= 27.0 {
        draft.recommendations.push("BMI偏高：建議以低衝擊有氧運動為主，配合飲食管理");
        draft.types = vec!["低衝擊有氧", "水中運動", "肌力訓練"];
        draft.warnings.push("建議諮詢醫師或營養師制定完整的體重管理計畫");
    }
}

fn apply_diseases(draft: &mut Draft, profile: &PersonalProfile, adult: bool) {
    if profile.has_disease(Disease::Hypertension) {
        draft.types.push(AEROBIC);
        draft.warnings.push("避免閉氣用力動作，運動中保持呼吸順暢");
        draft.recommendations.push("建議每次運動前後測量血壓");
    }

    if profile.has_disease(Disease::Diabetes) {
        draft.types.extend([AEROBIC, "阻力訓練"]);
        draft.warnings.push("運動前後檢查血糖，攜帶糖果備用");
        draft.recommendations.push("建議餐後1-2小時運動");
    }

    if profile.has_disease(Disease::Arthritis) {
        draft.types.extend(["水中運動", "柔軟度訓練"]);
        draft.warnings.push("避免高衝擊運動，關節疼痛時應停止");
        draft.time = draft.time.min(30);
    }

    if profile.has_disease(Disease::HeartRecovery) {
        draft.intensity = PlanIntensity::LightModerate;
        draft.warnings.push("嚴格監控心率，出現胸痛立即停止");
        draft.recommendations.push("建議在醫師監督下開始運動計畫");
    }

    if profile.has_disease(Disease::Sarcopenia) {
        draft.types.extend(["阻力訓練", "蛋白質營養"]);
        draft.recommendations.extend([
            "重點加強肌力訓練，每週至少3次阻力運動",
            "建議搭配營養師指導，確保足夠蛋白質攝取",
        ]);
        draft.warnings.push("漸進式增加負重，避免過度訓練造成傷害");
        if adult {
            draft.frequency = draft.frequency.max(4);
        }
    }

    if profile.has_disease(Disease::CancerRecovery) {
        if adult {
            draft.frequency = draft.frequency.max(3);
        }
        draft.types.extend([AEROBIC, "阻力訓練"]);
        draft.warnings.push("依據治療階段調整運動強度");
    }
}

fn apply_limitations(draft: &mut Draft, profile: &PersonalProfile) {
    if profile.has_limitation(Limitation::Pain) {
        draft.intensity = PlanIntensity::Light;
        draft.warnings.push("疼痛時立即停止運動");
    }

    if profile.has_limitation(Limitation::FallRisk) {
        draft.types.push("平衡訓練");
        draft.warnings.push("避免需要快速方向改變的運動");
        draft.recommendations.push("建議在安全環境下運動，有人陪伴");
    }

    if profile.has_limitation(Limitation::Balance) {
        draft.types.extend(["平衡訓練", "太極"]);
        draft.warnings.push("運動時應有支撐物在旁");
    }

    if profile.has_limitation(Limitation::Palpitation) {
        draft.intensity = PlanIntensity::LightModerate;
        draft.warnings.push("心跳過快時立即停止並休息");
    }
}

fn apply_habit(draft: &mut Draft, habit: ExerciseHabit, adult: bool) {
    match habit {
        ExerciseHabit::Inactive if adult => {
            draft.frequency = 3;
            draft.time = draft.time.min(20);
            draft.progression = "前4週每週增加5分鐘，之後每2週增加5分鐘";
        }
        ExerciseHabit::Light if adult => draft.time = draft.time.min(30),
        ExerciseHabit::Active if adult => {
            draft.frequency = draft.frequency.max(4);
            draft.time = draft.time.max(40);
        }
        ExerciseHabit::StudentAthlete if adult => {
            draft.frequency = draft.frequency.max(5);
            draft.time = draft.time.max(60);
            draft.types.push("專項訓練");
        }
        ExerciseHabit::StudentAthlete => {
            draft.types.extend(["專項技能訓練", "競技表現提升"]);
            draft.recommendations.push("配合專業教練指導");
            draft.warnings.push("注意訓練負荷管理，避免過度訓練");
        }
        _ => {}
    }
}

fn dedup_preserving_order(items: Vec<&'static str>) -> Vec<&'static str> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Catalog intensity to suggest for a profile.
pub fn suggested_intensity(profile: &PersonalProfile) -> Intensity {
    if profile.age >= 65 || profile.fitness_level == FitnessRating::Poor {
        Intensity::Light
    } else if profile.fitness_level == FitnessRating::Excellent && profile.age < 50 {
        Intensity::Vigorous
    } else {
        Intensity::Moderate
    }
}

fn suggested_activities(profile: &PersonalProfile) -> SuggestedActivities {
    let intensity = suggested_intensity(profile);
    let activities = get_activities_by_intensity(intensity)
        .into_iter()
        .take(SUGGESTED_ACTIVITY_COUNT)
        .map(|activity| SampleActivity {
            activity: activity.name,
            met_value: activity.met_value,
            calories_30min: round_to_tenth(calculate_expenditure(profile.weight_kg, activity.met_value, 30)),
            examples: activity.examples,
        })
        .collect();

    SuggestedActivities {
        intensity,
        met_range: intensity.met_range(),
        activities,
    }
}

pub fn exercise_examples(types: &[&'static str]) -> Vec<&'static str> {
    let all = types.iter().flat_map(|t| examples_for(t).iter().copied()).collect();
    let mut unique = dedup_preserving_order(all);
    unique.truncate(MAX_EXAMPLES);
    unique
}

pub fn create_personal_plan(profile: &PersonalProfile) -> PersonalPlan {
    let age_group = AgeGroup::from_age(profile.age);
    let adult = !age_group.is_minor();
    let bmi = bmi_reading(profile);

    let mut draft = Draft::default();
    apply_age_base(&mut draft, age_group);

    if adult {
        apply_adult_fitness(&mut draft, profile.fitness_level);
        if let Some(reading) = bmi {
            apply_bmi(&mut draft, reading.value);
        }
    } else {
        apply_minor_fitness(&mut draft, profile.fitness_level);
    }

    apply_diseases(&mut draft, profile, adult);
    apply_limitations(&mut draft, profile);

    if adult && !draft.types.contains(&AEROBIC) {
        draft.types.insert(0, AEROBIC);
    }

    apply_habit(&mut draft, profile.exercise_habit, adult);

    let types = dedup_preserving_order(draft.types);
    debug!(
        "Personal plan for {:?}: {} x {} min, types {:?}",
        age_group, draft.frequency, draft.time, types
    );

    PersonalPlan {
        age_group,
        frequency: draft.frequency,
        intensity: draft.intensity,
        time: draft.time,
        exercise_examples: exercise_examples(&types),
        types,
        volume: draft.volume,
        progression: draft.progression,
        warnings: draft.warnings,
        recommendations: draft.recommendations,
        bmi,
        suggested_activities: suggested_activities(profile),
    }
}
