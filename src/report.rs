//! Plain-text rendering of schedules, prescriptions and MET summaries for the
//! `prescription-report` binary.

use validator::Validate;

use crate::data::met_table::{WHO_ADDITIONAL_BENEFIT_MET_MINUTES, WHO_WEEKLY_MET_MINUTES};
use crate::errors::AppError;
use crate::models::activity::{Activity, ActivityLogEntry, Intensity, WeeklyMetSummary};
use crate::models::education::MetIntroduction;
use crate::models::guideline::{IndividualPrescription, WeeklySchedule};
use crate::services::energy::{calculate_expenditure, get_activities_by_intensity};

const RULE: &str = "----------------------------------------";

/// Parses `name:minutesxsessions`, e.g. `快走:30x5`.
pub fn parse_log_entry(raw: &str) -> Result<ActivityLogEntry, AppError> {
    let invalid = || AppError::InvalidInput(format!("Expected NAME:MINUTESxSESSIONS, got '{}'", raw));

    let (name, volume) = raw.rsplit_once(':').ok_or_else(invalid)?;
    let (minutes, sessions) = volume.split_once(|c: char| c == 'x' || c == 'X').ok_or_else(invalid)?;

    let duration_minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
    let frequency_per_week: u32 = sessions.trim().parse().map_err(|_| invalid())?;

    let entry = ActivityLogEntry::new(name.trim(), duration_minutes, frequency_per_week);
    entry
        .validate()
        .map_err(|err| AppError::InvalidInput(format!("'{}': {}", raw, err)))?;
    Ok(entry)
}

/// Joins rendered lines, ending with a newline.
fn render(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn format_schedule(age: i32, schedule: &WeeklySchedule) -> String {
    let mut lines = vec![format!("{}歲 ({}) 每週運動計畫", age, schedule.age_group), RULE.to_string()];
    lines.extend(
        schedule
            .weekly_schedule
            .iter()
            .map(|day| format!("  {:<10} {}", format!("{:?}", day.day), day.plan)),
    );
    lines.push(format!("總量: {}", schedule.total_weekly_volume));
    lines.extend(schedule.progression_notes.iter().map(|note| format!("  - {}", note)));
    render(lines)
}

pub fn format_prescription(prescription: &IndividualPrescription) -> String {
    let base = prescription.base_prescription;
    let mut lines = vec![
        format!("運動處方 [{}]", prescription.age_group),
        RULE.to_string(),
        format!("  Frequency:   {}", base.frequency),
        format!("  Intensity:   {} ({} METs)", base.intensity, base.intensity.met_range()),
        format!("  Time:        {}", base.time),
        format!("  Volume:      {}", base.volume),
        format!("  Progression: {}", base.progression),
    ];
    lines.extend(base.met_guidelines.iter().map(|note| format!("  {}: {}", note.label, note.text)));

    lines.push("推薦活動 (30分鐘):".to_string());
    lines.extend(prescription.recommended_activities.iter().map(|sample| {
        format!(
            "  {} {} METs, {} kcal ({})",
            sample.activity,
            sample.met_value,
            sample.calories_30min,
            sample.examples.join("、")
        )
    }));

    lines.extend(
        prescription
            .modifications
            .iter()
            .chain(&prescription.safety_considerations)
            .map(|line| format!("  * {}", line)),
    );
    render(lines)
}

pub fn format_met_introduction(intro: &MetIntroduction) -> String {
    let mut lines = vec!["MET 基本概念".to_string(), RULE.to_string()];
    lines.extend(intro.basic_concepts.iter().map(|note| format!("{}: {}", note.label, note.text)));

    for band in intro.intensity_classes {
        lines.push(format!("{}: {}", band.label, band.met_range));
        lines.push(format!("  {}", band.signs));
        lines.push(format!("  例子: {}", band.examples));
    }

    for topic in intro.applications {
        lines.push(format!("[{}]", topic.topic));
        lines.extend(topic.points.iter().map(|note| format!("  {}: {}", note.label, note.text)));
    }

    lines.extend(intro.usage_notes.iter().map(|note| format!("* {}: {}", note.label, note.text)));
    render(lines)
}

pub fn format_activity_table(body_weight_kg: f64) -> String {
    let mut lines = Vec::new();
    for intensity in Intensity::ALL {
        lines.push(format!("{} ({} METs)", intensity.label_zh(), intensity.met_range()));
        lines.extend(
            get_activities_by_intensity(intensity)
                .into_iter()
                .map(|activity| format!("  {}", format_activity_row(activity, body_weight_kg))),
        );
    }
    render(lines)
}

fn format_activity_row(activity: &Activity, body_weight_kg: f64) -> String {
    format!(
        "{:<12} {:>4.1} METs  {:>6.1} kcal/30min",
        activity.name,
        activity.met_value,
        calculate_expenditure(body_weight_kg, activity.met_value, 30)
    )
}

pub fn format_met_summary(summary: &WeeklyMetSummary) -> String {
    let mut lines = vec!["每週 MET-分鐘".to_string(), RULE.to_string()];
    lines.extend(summary.breakdown.iter().map(|row| {
        format!(
            "  {} -> {}: {} METs x {} min = {:.0}",
            row.activity, row.matched_activity, row.met_value, row.weekly_minutes, row.met_minutes
        )
    }));
    lines.extend(summary.unmatched.iter().map(|name| format!("  {}: 無對應活動，未計入", name)));
    lines.push(format!(
        "總計 {:.0} MET-分鐘 (目標 {:.0}-{:.0}): {}",
        summary.total_met_minutes, WHO_WEEKLY_MET_MINUTES, WHO_ADDITIONAL_BENEFIT_MET_MINUTES, summary.who_recommendation_status
    ));
    render(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::energy::{calculate_weekly_met_minutes, met_introduction};
    use crate::services::guidelines::create_weekly_schedule;

    #[test]
    fn parses_log_entries() {
        let entry = parse_log_entry("快走:30x5").unwrap();
        assert_eq!(entry.activity, "快走");
        assert_eq!(entry.duration_minutes, 30);
        assert_eq!(entry.frequency_per_week, 5);

        assert!(parse_log_entry("快走").is_err());
        assert!(parse_log_entry("快走:30").is_err());
        assert!(parse_log_entry("快走:0x5").is_err());
        assert!(parse_log_entry(":30x5").is_err());
    }

    #[test]
    fn log_entries_share_the_http_bounds() {
        assert!(parse_log_entry("跑步:1440x14").is_ok());
        assert!(matches!(parse_log_entry("跑步:100000x100000"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_log_entry("跑步:30x15"), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn summary_lists_unmatched_names() {
        let summary = calculate_weekly_met_minutes(&[
            ActivityLogEntry::new("快走", 30, 5),
            ActivityLogEntry::new("skydiving", 10, 1),
        ]);
        let text = format_met_summary(&summary);
        assert!(text.contains("總計 525 MET-分鐘"));
        assert!(text.contains("skydiving"));
        assert!(text.contains("符合"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn schedule_lists_seven_days() {
        let text = format_schedule(35, &create_weekly_schedule(35));
        assert!(text.starts_with("35歲 (18-64 years)"));
        assert!(text.contains("Monday"));
        assert!(text.contains("Sunday"));
    }

    #[test]
    fn introduction_renders_every_section() {
        let text = format_met_introduction(met_introduction());
        assert!(text.contains("定義: MET"));
        assert!(text.contains("中度活動 (Moderate): 3.0 - 5.9 METs"));
        assert!(text.contains("[運動處方]"));
        assert!(text.contains("* 安全考量"));
    }
}
