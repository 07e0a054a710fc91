use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::AppError;

/// Lower bound of the light band; anything below is sedentary.
pub const LIGHT_MET_FLOOR: f64 = 1.6;
pub const MODERATE_MET_FLOOR: f64 = 3.0;
pub const VIGOROUS_MET_FLOOR: f64 = 6.0;

/// Longest single session a log entry may record.
pub const MAX_SESSION_MINUTES: u32 = 1440;
/// Most sessions per week a log entry may record (two a day).
pub const MAX_SESSIONS_PER_WEEK: u32 = 14;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    Moderate,
    Vigorous,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Moderate, Intensity::Vigorous];

    /// Classifies a MET value into its intensity band. Sedentary values yield `None`.
    pub fn from_met(met_value: f64) -> Option<Self> {
        if met_value >= VIGOROUS_MET_FLOOR {
            Some(Intensity::Vigorous)
        } else if met_value >= MODERATE_MET_FLOOR {
            Some(Intensity::Moderate)
        } else if met_value >= LIGHT_MET_FLOOR {
            Some(Intensity::Light)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Vigorous => "vigorous",
        }
    }

    pub fn met_range(&self) -> &'static str {
        match self {
            Intensity::Light => "1.6-2.9",
            Intensity::Moderate => "3.0-5.9",
            Intensity::Vigorous => "≥6.0",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            Intensity::Light => "輕度",
            Intensity::Moderate => "中度",
            Intensity::Vigorous => "高強度",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Intensity::Light),
            "moderate" => Ok(Intensity::Moderate),
            "vigorous" => Ok(Intensity::Vigorous),
            other => Err(AppError::BadRequest(format!(
                "Intensity must be one of light, moderate, vigorous (got '{}')",
                other
            ))),
        }
    }
}

/// Prescription catalog entry.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: &'static str,
    pub intensity: Intensity,
    pub met_value: f64,
    pub examples: &'static [&'static str],
}

#[derive(Deserialize, Serialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    #[validate(length(min = 1, message = "Activity name cannot be empty"))]
    pub activity: String,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: u32,

    #[validate(range(min = 1, max = 14, message = "Frequency must be between 1 and 14 sessions per week"))]
    pub frequency_per_week: u32,
}

impl ActivityLogEntry {
    pub fn new(activity: impl Into<String>, duration_minutes: u32, frequency_per_week: u32) -> Self {
        Self {
            activity: activity.into(),
            duration_minutes,
            frequency_per_week,
        }
    }

    /// Exact for every `u32` pair; the product never exceeds `u64`.
    pub fn weekly_minutes(&self) -> u64 {
        u64::from(self.duration_minutes) * u64::from(self.frequency_per_week)
    }
}

/// WHO status of a weekly MET-minute total.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidelineStatus {
    #[serde(rename = "符合")]
    Meets,
    #[serde(rename = "未達標")]
    BelowTarget,
}

impl GuidelineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GuidelineStatus::Meets => "符合",
            GuidelineStatus::BelowTarget => "未達標",
        }
    }
}

impl fmt::Display for GuidelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetBreakdown {
    pub activity: String,
    pub matched_activity: &'static str,
    pub met_value: f64,
    pub weekly_minutes: u64,
    pub met_minutes: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMetSummary {
    pub total_met_minutes: f64,
    pub who_recommendation_status: GuidelineStatus,
    pub breakdown: Vec<MetBreakdown>,
    pub unmatched: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStrategy {
    pub strategy: &'static str,
    pub description: String,
    pub example: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    pub target: String,
    pub strategies: Vec<ActivityStrategy>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Household,
    Transportation,
    Sports,
    Recreation,
    Occupational,
    Conditioning,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Household,
        ActivityCategory::Transportation,
        ActivityCategory::Sports,
        ActivityCategory::Recreation,
        ActivityCategory::Occupational,
        ActivityCategory::Conditioning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Household => "household",
            ActivityCategory::Transportation => "transportation",
            ActivityCategory::Sports => "sports",
            ActivityCategory::Recreation => "recreation",
            ActivityCategory::Occupational => "occupational",
            ActivityCategory::Conditioning => "conditioning",
        }
    }
}

impl FromStr for ActivityCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ActivityCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| AppError::NotFound(format!("Unknown activity category '{}'", s)))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub name: &'static str,
    pub met_value: f64,
}

/// MET education library entry.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryActivity {
    pub name: &'static str,
    pub category: ActivityCategory,
    pub met_value: f64,
    pub intensity: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub considerations: &'static [&'static str],
    pub variations: &'static [Variation],
}
