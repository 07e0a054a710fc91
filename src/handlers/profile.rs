use actix_web::{web, HttpResponse};
use log::debug;
use crate::errors::AppError;
use crate::models::profile::PersonalProfile;
use crate::services::personal_plan::create_personal_plan;
use crate::utils::validation::validate_payload;

// POST /v1/plan
pub async fn create_plan(payload: web::Json<PersonalProfile>) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;

    let plan = create_personal_plan(&payload);
    debug!("Plan for age {} has {} warnings", payload.age, plan.warnings.len());

    Ok(HttpResponse::Ok().json(plan))
}
