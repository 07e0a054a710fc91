pub mod activity;
pub mod fitt_vp;
pub mod guideline;
pub mod population;
pub mod profile;

use actix_web::web;
use crate::errors::AppError;

/// Registers every `/v1` route along with extractor configs that report
/// malformed bodies, queries and paths through `AppError`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/v1")
            .service(
                web::resource("/guidelines")
                    .route(web::get().to(guideline::get_guideline_for_age)),
            )
            .service(
                web::resource("/guidelines/{bracket}")
                    .route(web::get().to(guideline::get_guideline)),
            )
            .service(
                web::resource("/schedule")
                    .route(web::get().to(guideline::get_schedule)),
            )
            .service(
                web::resource("/prescription")
                    .route(web::post().to(guideline::create_prescription)),
            )
            .service(
                web::resource("/expenditure")
                    .route(web::post().to(activity::calculate_expenditure)),
            )
            .service(
                web::resource("/met-minutes")
                    .route(web::post().to(activity::weekly_met_minutes)),
            )
            .service(
                web::resource("/activity")
                    .route(web::get().to(activity::get_activities)),
            )
            .service(
                web::resource("/activity/search")
                    .route(web::get().to(activity::search_activities)),
            )
            .service(
                web::resource("/library")
                    .route(web::get().to(activity::get_library)),
            )
            .service(
                web::resource("/library/search")
                    .route(web::get().to(activity::search_library)),
            )
            .service(
                web::resource("/met/introduction")
                    .route(web::get().to(activity::get_met_introduction)),
            )
            .service(
                web::resource("/strategies")
                    .route(web::get().to(activity::get_strategies)),
            )
            .service(
                web::resource("/fitt-vp")
                    .route(web::post().to(fitt_vp::create_fitt_vp)),
            )
            .service(
                web::resource("/fitt-vp/framework")
                    .route(web::get().to(fitt_vp::get_framework)),
            )
            .service(
                web::resource("/populations/{population}")
                    .route(web::get().to(population::get_adapted_prescription)),
            )
            .service(
                web::resource("/conditions/{condition}")
                    .route(web::get().to(population::get_condition)),
            )
            .service(
                web::resource("/plan")
                    .route(web::post().to(profile::create_plan)),
            ),
    );
}
