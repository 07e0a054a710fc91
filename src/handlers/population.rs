use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;
use crate::errors::AppError;
use crate::models::population::{ChronicCondition, SpecialPopulation};
use crate::services::populations;
use crate::utils::validation::validate_payload;

fn default_activity_level() -> String {
    "sedentary".to_string()
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedQuery {
    condition: Option<String>,

    #[serde(default = "default_activity_level")]
    activity_level: String,

    #[validate(range(min = 5, max = 120, message = "Age must be between 5 and 120"))]
    age: i32,
}

// GET /v1/populations/{population}
pub async fn get_adapted_prescription(
    path: web::Path<String>,
    query: web::Query<AdaptedQuery>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*query)?;

    let population = path.parse::<SpecialPopulation>()?;
    let condition = query
        .condition
        .as_deref()
        .map(str::parse::<ChronicCondition>)
        .transpose()?;

    let prescription =
        populations::create_adapted_prescription(population, query.age, condition, &query.activity_level)?;

    Ok(HttpResponse::Ok().json(prescription))
}

// GET /v1/conditions/{condition}
pub async fn get_condition(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let condition = path.parse::<ChronicCondition>()?;
    Ok(HttpResponse::Ok().json(populations::condition_guideline(condition)?))
}
