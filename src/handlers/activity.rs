use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;
use log::info;
use crate::config::AppConfig;
use crate::data::met_library::MET_LIBRARY;
use crate::data::met_table::MET_ACTIVITIES;
use crate::errors::AppError;
use crate::models::activity::{Activity, ActivityCategory, ActivityLogEntry, Intensity, LibraryActivity};
use crate::services::energy;
use crate::utils::validation::{validate_expenditure_input, validate_met_range, validate_payload};

const DEFAULT_STRATEGY_TARGET: u32 = 500;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureRequest {
    weight_kg: f64,
    met_value: f64,
    #[validate(range(max = 1440, message = "Duration cannot exceed one day"))]
    duration_minutes: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureResponse {
    weight_kg: f64,
    met_value: f64,
    duration_minutes: u32,
    calories_burned: f64,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyLogRequest {
    #[validate]
    activities: Vec<ActivityLogEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    min_met: Option<f64>,
    max_met: Option<f64>,
    intensity: Option<String>,
}

#[derive(Deserialize)]
pub struct KeywordQuery {
    keyword: String,
}

#[derive(Deserialize)]
pub struct CategoryQuery {
    category: Option<String>,
}

#[derive(Deserialize)]
pub struct StrategyQuery {
    target: Option<u32>,
}

// POST /v1/expenditure
pub async fn calculate_expenditure(payload: web::Json<ExpenditureRequest>) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;
    validate_expenditure_input(payload.weight_kg, payload.met_value, payload.duration_minutes)?;

    let calories_burned = energy::calculate_expenditure(payload.weight_kg, payload.met_value, payload.duration_minutes);

    Ok(HttpResponse::Ok().json(ExpenditureResponse {
        weight_kg: payload.weight_kg,
        met_value: payload.met_value,
        duration_minutes: payload.duration_minutes,
        calories_burned,
    }))
}

// POST /v1/met-minutes
pub async fn weekly_met_minutes(
    config: web::Data<AppConfig>,
    payload: web::Json<WeeklyLogRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;

    let summary = if config.strict_activity_matching {
        energy::calculate_weekly_met_minutes_strict(&payload.activities)?
    } else {
        energy::calculate_weekly_met_minutes(&payload.activities)
    };

    info!(
        "Weekly log of {} entries totals {} MET-minutes ({})",
        payload.activities.len(),
        summary.total_met_minutes,
        summary.who_recommendation_status
    );

    Ok(HttpResponse::Ok().json(summary))
}

// GET /v1/activity
pub async fn get_activities(query: web::Query<ActivityQuery>) -> Result<HttpResponse, AppError> {
    let intensity = query
        .intensity
        .as_deref()
        .map(str::parse::<Intensity>)
        .transpose()?;

    let mut activities: Vec<&'static Activity> = if query.min_met.is_some() || query.max_met.is_some() {
        let min_met = query.min_met.unwrap_or(0.0);
        let max_met = query.max_met.unwrap_or(f64::MAX);
        validate_met_range(min_met, max_met)?;
        energy::get_activities_by_met_range(min_met, max_met)
    } else {
        MET_ACTIVITIES.iter().collect()
    };

    if let Some(intensity) = intensity {
        activities.retain(|a| a.intensity == intensity);
    }

    Ok(HttpResponse::Ok().json(activities))
}

// GET /v1/activity/search
pub async fn search_activities(query: web::Query<KeywordQuery>) -> Result<HttpResponse, AppError> {
    if query.keyword.trim().is_empty() {
        return Err(AppError::BadRequest("Keyword cannot be empty".to_string()));
    }
    Ok(HttpResponse::Ok().json(energy::search_activities(query.keyword.trim())))
}

// GET /v1/library
pub async fn get_library(query: web::Query<CategoryQuery>) -> Result<HttpResponse, AppError> {
    let activities: Vec<&'static LibraryActivity> = match query.category.as_deref() {
        Some(category) => energy::library_by_category(category.parse::<ActivityCategory>()?),
        None => MET_LIBRARY.iter().collect(),
    };
    Ok(HttpResponse::Ok().json(activities))
}

// GET /v1/library/search
pub async fn search_library(query: web::Query<KeywordQuery>) -> Result<HttpResponse, AppError> {
    if query.keyword.trim().is_empty() {
        return Err(AppError::BadRequest("Keyword cannot be empty".to_string()));
    }
    Ok(HttpResponse::Ok().json(energy::search_library(query.keyword.trim())))
}

// GET /v1/met/introduction
pub async fn get_met_introduction() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(energy::met_introduction()))
}

// GET /v1/strategies
pub async fn get_strategies(query: web::Query<StrategyQuery>) -> Result<HttpResponse, AppError> {
    let target = query.target.unwrap_or(DEFAULT_STRATEGY_TARGET);
    if target == 0 {
        return Err(AppError::InvalidInput("target must be a positive number of MET-minutes".to_string()));
    }
    Ok(HttpResponse::Ok().json(energy::activity_strategies(target)))
}
