use actix_web::{web, HttpResponse};
use crate::errors::AppError;
use crate::models::fitt_vp::FittVpRequest;
use crate::services::fitt_vp::{create_fitt_vp_response, framework_reference};
use crate::utils::validation::validate_payload;

// POST /v1/fitt-vp
pub async fn create_fitt_vp(payload: web::Json<FittVpRequest>) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;
    Ok(HttpResponse::Ok().json(create_fitt_vp_response(&payload)))
}

// GET /v1/fitt-vp/framework
pub async fn get_framework() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(framework_reference()))
}
