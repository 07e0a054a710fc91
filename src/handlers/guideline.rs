use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;
use crate::errors::AppError;
use crate::models::guideline::{AgeBracket, PrescriptionRequest};
use crate::services::guidelines;
use crate::utils::validation::{validate_payload, validate_positive};

#[derive(Deserialize, Validate)]
pub struct AgeQuery {
    #[validate(range(min = 5, max = 120, message = "Age must be between 5 and 120"))]
    age: i32,
}

// GET /v1/guidelines/{bracket}
pub async fn get_guideline(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let bracket = path.parse::<AgeBracket>()?;
    Ok(HttpResponse::Ok().json(guidelines::get_recommendations(bracket)))
}

// GET /v1/guidelines?age=
pub async fn get_guideline_for_age(query: web::Query<AgeQuery>) -> Result<HttpResponse, AppError> {
    validate_payload(&*query)?;
    Ok(HttpResponse::Ok().json(guidelines::get_recommendations_for_age(query.age)))
}

// GET /v1/schedule?age=
pub async fn get_schedule(query: web::Query<AgeQuery>) -> Result<HttpResponse, AppError> {
    validate_payload(&*query)?;
    Ok(HttpResponse::Ok().json(guidelines::create_weekly_schedule(query.age)))
}

// POST /v1/prescription
pub async fn create_prescription(payload: web::Json<PrescriptionRequest>) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;
    validate_positive("bodyWeightKg", payload.body_weight_kg)?;

    Ok(HttpResponse::Ok().json(guidelines::create_individualized_prescription(&payload)))
}
