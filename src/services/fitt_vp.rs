//! FITT-VP prescriptions: Frequency, Intensity, Time, Type, Volume, Progression.

use log::debug;

use crate::data::fitt_vp::{
    aerobic_scale, resistance_scale, BASE_MONITORING, DEFAULT_PROGRESSION_GOAL, EXERCISE_TYPES, FOUNDATION_PHASES,
    MAINTENANCE_PHASE, PROGRESSION_BY_GOAL, PROGRESSION_STRATEGIES, REASSESSMENT_WEEKS, SUCCESS_METRICS,
};
use crate::models::activity::Intensity;
use crate::models::fitt_vp::{
    ExerciseType, FitnessLevel, FittVpPrescription, FittVpRequest, FittVpResponse, FrameworkReference,
    IntensityPrescription, IntensityScales, PeriodizedPlan, ProgressionStrategy,
};

const FOUNDATION_WEEKS: u32 = 12;

fn types_for_goal(goal: &str) -> (Vec<ExerciseType>, u32) {
    use ExerciseType::*;

    match goal {
        "weight_loss" | "cardiovascular_health" => (vec![Aerobic, Resistance], 70),
        "strength" | "muscle_building" => (vec![Resistance, Aerobic], 30),
        "general_health" | "maintenance" => (vec![Aerobic, Resistance, Flexibility], 50),
        _ => (vec![Aerobic, Resistance], 60),
    }
}

/// Intensity and the caps on days and minutes for a fitness level.
fn fitness_limits(level: FitnessLevel) -> (Intensity, Option<u32>, Option<u32>) {
    match level {
        FitnessLevel::Beginner => (Intensity::Light, Some(3), Some(30)),
        FitnessLevel::Intermediate => (Intensity::Moderate, Some(5), Some(45)),
        FitnessLevel::Advanced => (Intensity::Vigorous, None, None),
    }
}

fn capped(available: u32, cap: Option<u32>) -> u32 {
    cap.map_or(available, |cap| available.min(cap))
}

pub fn progression_strategy(goal: &str) -> &'static ProgressionStrategy {
    let goal = goal.to_lowercase();
    PROGRESSION_BY_GOAL
        .get(goal.as_str())
        .or_else(|| PROGRESSION_BY_GOAL.get(DEFAULT_PROGRESSION_GOAL))
        .copied()
        .unwrap_or(&PROGRESSION_STRATEGIES[0])
}

fn limitation_modifications(limitations: &[String]) -> Vec<&'static str> {
    let mut modifications = Vec::new();
    for limitation in limitations {
        let limitation = limitation.to_lowercase();
        if limitation.contains("knee") {
            modifications.push("Use low-impact aerobic activities");
        }
        if limitation.contains("back") {
            modifications.push("Avoid overhead movements initially");
        }
        if limitation.contains("time") {
            modifications.push("Consider high-intensity interval training");
        }
    }
    modifications
}

pub fn create_fitt_vp_prescription(request: &FittVpRequest) -> FittVpPrescription {
    let goal = request.goal.to_lowercase();
    let (types, aerobic_emphasis) = types_for_goal(&goal);
    let (level, max_days, max_minutes) = fitness_limits(request.current_fitness);

    let days_per_week = capped(request.frequency_available, max_days);
    let minutes_per_session = capped(request.time_available, max_minutes);
    let weekly_minutes = days_per_week * minutes_per_session;

    let aerobic = aerobic_scale(level);
    let resistance = resistance_scale(level);
    let strategy = progression_strategy(&goal);

    let mut monitoring = BASE_MONITORING.to_vec();
    if request.limitations.iter().any(|l| l.to_lowercase().contains("heart")) {
        monitoring.push("Monitor heart rate during exercise");
    }

    debug!(
        "FITT-VP for goal '{}' at {} level: {} days x {} min",
        request.goal,
        request.current_fitness.as_str(),
        days_per_week,
        minutes_per_session
    );

    FittVpPrescription {
        frequency: format!("{} days/week", days_per_week),
        days_per_week,
        intensity: IntensityPrescription {
            level,
            aerobic: format!("{} or RPE {}", aerobic.hr_percentage, aerobic.rpe_scale),
            resistance: format!("{} or {}", resistance.percentage_1rm, resistance.repetitions),
            talk_test: aerobic.talk_test,
        },
        time: format!("{} minutes", minutes_per_session),
        minutes_per_session,
        types,
        aerobic_emphasis,
        volume: format!("{} minutes/week", weekly_minutes),
        weekly_minutes,
        progression: format!("{} - {}", strategy.principle, strategy.progression_rate),
        rationale: format!(
            "Designed for {} considering {} fitness level",
            request.goal,
            request.current_fitness.as_str()
        ),
        modifications: limitation_modifications(&request.limitations),
        monitoring,
    }
}

pub fn create_periodized_plan(weeks: u32) -> PeriodizedPlan {
    let mut phases: Vec<_> = FOUNDATION_PHASES.iter().collect();
    if weeks > FOUNDATION_WEEKS {
        phases.push(&MAINTENANCE_PHASE);
    }

    PeriodizedPlan {
        total_duration: format!("{} weeks", weeks),
        phases,
        reassessment_points: REASSESSMENT_WEEKS,
        success_metrics: SUCCESS_METRICS,
    }
}

pub fn framework_reference() -> FrameworkReference {
    FrameworkReference {
        intensity_scales: Intensity::ALL
            .into_iter()
            .map(|level| IntensityScales {
                level,
                aerobic: aerobic_scale(level),
                resistance: resistance_scale(level),
            })
            .collect(),
        exercise_types: EXERCISE_TYPES,
        progression_strategies: PROGRESSION_STRATEGIES,
    }
}

/// Prescription with a periodized plan attached when the request names a length.
pub fn create_fitt_vp_response(request: &FittVpRequest) -> FittVpResponse {
    FittVpResponse {
        prescription: create_fitt_vp_prescription(request),
        periodized_plan: request.weeks.map(create_periodized_plan),
    }
}
