//! Activity energy and volume calculator.
//!
//! Energy expenditure uses `kcal = MET × weight_kg × hours`; weekly volume uses
//! `MET-minutes = MET × minutes × sessions`, compared against the WHO target.

use log::{debug, warn};

use crate::data::met_education::MET_INTRODUCTION;
use crate::data::met_library::MET_LIBRARY;
use crate::data::met_table::{MET_ACTIVITIES, WHO_WEEKLY_MET_MINUTES};
use crate::errors::AppError;
use crate::models::activity::{
    Activity, ActivityCategory, ActivityLogEntry, ActivityStrategy, GuidelineStatus, Intensity, LibraryActivity,
    MetBreakdown, StrategyPlan, WeeklyMetSummary,
};
use crate::models::education::MetIntroduction;

/// Average MET of a moderate session, used when planning toward a target.
const MODERATE_PLANNING_MET: f64 = 4.0;
/// Average MET of a vigorous session, used when planning toward a target.
const VIGOROUS_PLANNING_MET: f64 = 8.0;

/// Kilocalories burned: `MET × weight_kg × (minutes / 60)`. Inputs are not guarded.
pub fn calculate_expenditure(weight_kg: f64, met_value: f64, duration_minutes: u32) -> f64 {
    let hours = f64::from(duration_minutes) / 60.0;
    met_value * weight_kg * hours
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn guideline_status(total_met_minutes: f64) -> GuidelineStatus {
    if total_met_minutes >= WHO_WEEKLY_MET_MINUTES {
        GuidelineStatus::Meets
    } else {
        GuidelineStatus::BelowTarget
    }
}

pub fn get_activities_by_intensity(intensity: Intensity) -> Vec<&'static Activity> {
    MET_ACTIVITIES.iter().filter(|a| a.intensity == intensity).collect()
}

/// Inclusive MET range query over the catalog, sorted ascending by MET value.
pub fn get_activities_by_met_range(min_met: f64, max_met: f64) -> Vec<&'static Activity> {
    let mut matching: Vec<&'static Activity> = MET_ACTIVITIES
        .iter()
        .filter(|a| min_met <= a.met_value && a.met_value <= max_met)
        .collect();
    matching.sort_by(|a, b| a.met_value.total_cmp(&b.met_value));
    matching
}

/// Case-insensitive keyword search over catalog names and examples.
pub fn search_activities(keyword: &str) -> Vec<&'static Activity> {
    let keyword = keyword.to_lowercase();
    MET_ACTIVITIES
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&keyword)
                || a.examples.iter().any(|e| e.to_lowercase().contains(&keyword))
        })
        .collect()
}

/// Resolves a logged name to a catalog entry.
///
/// Names are searched first, in catalog order, and the first substring match wins.
/// Example lists are only consulted when no name matches.
pub fn find_activity(name: &str) -> Option<&'static Activity> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    MET_ACTIVITIES
        .iter()
        .find(|a| a.name.to_lowercase().contains(&needle))
        .or_else(|| {
            MET_ACTIVITIES
                .iter()
                .find(|a| a.examples.iter().any(|e| e.to_lowercase().contains(&needle)))
        })
}

fn breakdown_for(entry: &ActivityLogEntry, activity: &'static Activity) -> MetBreakdown {
    let weekly_minutes = entry.weekly_minutes();
    MetBreakdown {
        activity: entry.activity.clone(),
        matched_activity: activity.name,
        met_value: activity.met_value,
        weekly_minutes,
        met_minutes: activity.met_value * weekly_minutes as f64,
    }
}

fn summarize(breakdown: Vec<MetBreakdown>, unmatched: Vec<String>) -> WeeklyMetSummary {
    let total_met_minutes: f64 = breakdown.iter().map(|b| b.met_minutes).sum();
    WeeklyMetSummary {
        total_met_minutes,
        who_recommendation_status: guideline_status(total_met_minutes),
        breakdown,
        unmatched,
    }
}

/// Sums weekly MET-minutes. Names with no catalog match contribute nothing and
/// are reported in `unmatched`.
pub fn calculate_weekly_met_minutes(entries: &[ActivityLogEntry]) -> WeeklyMetSummary {
    let mut breakdown = Vec::with_capacity(entries.len());
    let mut unmatched = Vec::new();

    for entry in entries {
        match find_activity(&entry.activity) {
            Some(activity) => {
                debug!("Resolved '{}' to '{}' ({} METs)", entry.activity, activity.name, activity.met_value);
                breakdown.push(breakdown_for(entry, activity));
            }
            None => {
                warn!("No catalog activity matches '{}'; excluded from weekly total", entry.activity);
                unmatched.push(entry.activity.clone());
            }
        }
    }

    summarize(breakdown, unmatched)
}

/// Like [`calculate_weekly_met_minutes`] but fails on the first unmatched name.
pub fn calculate_weekly_met_minutes_strict(entries: &[ActivityLogEntry]) -> Result<WeeklyMetSummary, AppError> {
    let breakdown = entries
        .iter()
        .map(|entry| {
            find_activity(&entry.activity)
                .map(|activity| breakdown_for(entry, activity))
                .ok_or_else(|| AppError::ActivityNotFound(entry.activity.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summarize(breakdown, Vec::new()))
}

pub fn library_by_category(category: ActivityCategory) -> Vec<&'static LibraryActivity> {
    MET_LIBRARY.iter().filter(|a| a.category == category).collect()
}

pub fn search_library(keyword: &str) -> Vec<&'static LibraryActivity> {
    let keyword = keyword.to_lowercase();
    MET_LIBRARY
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&keyword) || a.description.to_lowercase().contains(&keyword))
        .collect()
}

pub fn library_by_met_range(min_met: f64, max_met: f64) -> Vec<&'static LibraryActivity> {
    let mut matching: Vec<&'static LibraryActivity> = MET_LIBRARY
        .iter()
        .filter(|a| min_met <= a.met_value && a.met_value <= max_met)
        .collect();
    matching.sort_by(|a, b| a.met_value.total_cmp(&b.met_value));
    matching
}

pub fn met_introduction() -> &'static MetIntroduction {
    &MET_INTRODUCTION
}

/// Three ways to reach a weekly MET-minute target.
pub fn activity_strategies(target_met_minutes: u32) -> StrategyPlan {
    let target = f64::from(target_met_minutes);

    let moderate_minutes = target / MODERATE_PLANNING_MET;
    let vigorous_minutes = target / VIGOROUS_PLANNING_MET;

    StrategyPlan {
        target: format!("{} MET-分鐘/週", target_met_minutes),
        strategies: vec![
            ActivityStrategy {
                strategy: "中度活動為主",
                description: format!("每週進行{:.0}分鐘中度活動(如快走、騎車)", moderate_minutes),
                example: format!(
                    "每天快走{:.0}分鐘，或每週5天各{:.0}分鐘",
                    moderate_minutes / 7.0,
                    moderate_minutes / 5.0
                ),
            },
            ActivityStrategy {
                strategy: "高強度活動",
                description: format!("每週進行{:.0}分鐘高強度活動(如跑步、游泳)", vigorous_minutes),
                example: format!("每週3次，每次{:.0}分鐘高強度運動", vigorous_minutes / 3.0),
            },
            ActivityStrategy {
                strategy: "混合活動",
                description: "結合中度和高強度活動".to_string(),
                example: "每週3次中度活動(30分鐘) + 2次高強度活動(20分鐘)".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn expenditure_matches_formula() {
        for &(weight, met, minutes) in &[(70.0, 3.5, 30u32), (45.0, 8.0, 45), (92.3, 2.3, 0), (60.0, 10.0, 90)] {
            let expected = met * weight * f64::from(minutes) / 60.0;
            assert!((calculate_expenditure(weight, met, minutes) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn brisk_walk_example_burns_122_5_kcal() {
        assert!((calculate_expenditure(70.0, 3.5, 30) - 122.5).abs() < EPSILON);
    }

    #[test]
    fn brisk_walking_five_times_a_week_meets_the_target() {
        let summary = calculate_weekly_met_minutes(&[ActivityLogEntry::new("快走", 30, 5)]);
        assert!((summary.total_met_minutes - 525.0).abs() < EPSILON);
        assert_eq!(summary.who_recommendation_status, GuidelineStatus::Meets);
        assert_eq!(summary.breakdown.len(), 1);
        assert_eq!(summary.breakdown[0].weekly_minutes, 150);
        assert!(summary.unmatched.is_empty());
    }

    #[test]
    fn no_entries_is_below_target() {
        let summary = calculate_weekly_met_minutes(&[]);
        assert_eq!(summary.total_met_minutes, 0.0);
        assert_eq!(summary.who_recommendation_status, GuidelineStatus::BelowTarget);
    }

    #[test]
    fn unmatched_names_are_reported_not_counted() {
        let summary = calculate_weekly_met_minutes(&[
            ActivityLogEntry::new("快走", 30, 5),
            ActivityLogEntry::new("skydiving", 60, 1),
        ]);
        assert!((summary.total_met_minutes - 525.0).abs() < EPSILON);
        assert_eq!(summary.unmatched, vec!["skydiving".to_string()]);
    }

    #[test]
    fn strict_aggregation_rejects_unmatched_names() {
        let result = calculate_weekly_met_minutes_strict(&[
            ActivityLogEntry::new("快走", 30, 5),
            ActivityLogEntry::new("skydiving", 60, 1),
        ]);
        assert_eq!(result, Err(AppError::ActivityNotFound("skydiving".to_string())));

        let ok = calculate_weekly_met_minutes_strict(&[ActivityLogEntry::new("跑步", 20, 3)]).unwrap();
        assert!((ok.total_met_minutes - 480.0).abs() < EPSILON);
        assert_eq!(ok.who_recommendation_status, GuidelineStatus::BelowTarget);
    }

    #[test]
    fn first_catalog_match_wins_for_ambiguous_names() {
        // "游泳" matches both the easy and the fast swim; the moderate entry comes first.
        assert_eq!(find_activity("游泳").map(|a| a.name), Some("游泳(輕鬆)"));
        assert_eq!(find_activity("騎自行車").map(|a| a.met_value), Some(4.0));
    }

    #[test]
    fn names_outrank_examples_when_resolving() {
        // "太極" only appears in the stretching examples.
        assert_eq!(find_activity("太極").map(|a| a.name), Some("伸展運動"));
        assert_eq!(find_activity("crossfit").map(|a| a.name), Some("重量訓練"));
        assert_eq!(find_activity("   "), None);
    }

    #[test]
    fn demonstration_week_totals_930() {
        let summary = calculate_weekly_met_minutes(&[
            ActivityLogEntry::new("快走", 30, 5),
            ActivityLogEntry::new("游泳", 45, 2),
        ]);
        assert!((summary.total_met_minutes - 930.0).abs() < EPSILON);
    }

    #[test]
    fn huge_entries_keep_the_exact_product() {
        let summary = calculate_weekly_met_minutes(&[ActivityLogEntry::new("快走", 100_000, 100_000)]);
        assert_eq!(summary.breakdown[0].weekly_minutes, 10_000_000_000);
        assert!((summary.total_met_minutes - 35_000_000_000.0).abs() < EPSILON);
    }

    #[test]
    fn maximal_valid_entry_is_counted_in_full() {
        let summary = calculate_weekly_met_minutes_strict(&[ActivityLogEntry::new("跑步", 1440, 14)]).unwrap();
        assert_eq!(summary.breakdown[0].weekly_minutes, 20_160);
        assert!((summary.total_met_minutes - 8.0 * 20_160.0).abs() < EPSILON);
    }

    #[test]
    fn moderate_range_is_filtered_and_sorted() {
        let found = get_activities_by_met_range(3.0, 5.9);
        let mets: Vec<f64> = found.iter().map(|a| a.met_value).collect();
        assert_eq!(mets, vec![3.5, 4.0, 4.5, 4.8, 5.0]);
        assert!(found.iter().all(|a| (3.0..=5.9).contains(&a.met_value)));
    }

    #[test]
    fn vigorous_range_reorders_catalog() {
        let names: Vec<&str> = get_activities_by_met_range(6.0, 20.0).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["重量訓練", "籃球", "跑步", "騎自行車(快速)", "游泳(快速)"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(get_activities_by_met_range(6.0, 3.0).is_empty());
    }

    #[test]
    fn intensity_filter_keeps_catalog_order() {
        let names: Vec<&str> = get_activities_by_intensity(Intensity::Light).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["緩慢走路", "輕度家務", "伸展運動", "辦公室工作"]);
    }

    #[test]
    fn library_search_checks_descriptions() {
        let found: Vec<&str> = search_library("電梯").iter().map(|a| a.name).collect();
        assert_eq!(found, vec!["爬樓梯"]);
        assert_eq!(library_by_category(ActivityCategory::Occupational).len(), 2);
    }

    #[test]
    fn library_range_is_sorted() {
        let mets: Vec<f64> = library_by_met_range(3.0, 5.9).iter().map(|a| a.met_value).collect();
        assert_eq!(mets, vec![3.0, 3.0, 3.5, 4.8, 5.0, 5.5]);
    }

    #[test]
    fn strategies_split_the_default_target() {
        let plan = activity_strategies(500);
        assert_eq!(plan.target, "500 MET-分鐘/週");
        assert_eq!(plan.strategies.len(), 3);
        assert_eq!(plan.strategies[0].description, "每週進行125分鐘中度活動(如快走、騎車)");
        assert_eq!(plan.strategies[0].example, "每天快走18分鐘，或每週5天各25分鐘");
        assert_eq!(plan.strategies[1].example, "每週3次，每次21分鐘高強度運動");
    }

    #[test]
    fn introduction_has_all_four_sections() {
        let intro = met_introduction();
        assert_eq!(intro.basic_concepts[0].label, "定義");
        assert_eq!(intro.intensity_classes[1].intensity, Intensity::Moderate);
        assert_eq!(intro.applications[0].topic, "熱量計算");
        assert_eq!(intro.usage_notes.len(), 4);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(122.54), 122.5);
        assert_eq!(round_to_tenth(61.25), 61.3);
    }
}
