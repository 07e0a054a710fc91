use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use log::info;
use env_logger::Env;
use actix_web::middleware::Logger;
use std::collections::HashMap;
use std::io;

use fittvp_backend::config::AppConfig;
use fittvp_backend::handlers::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();

    info!(
        "Starting server at {} with {} workers (strict activity matching: {})",
        config.bind_address, config.workers, config.strict_activity_matching
    );

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "fittvp_backend".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint(&config.metrics_endpoint)
        .const_labels(labels)
        .build()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("Failed to create Prometheus metrics: {}", err)))?;

    let bind_address = config.bind_address.clone();
    let workers = config.workers;
    let shared_config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .app_data(shared_config.clone())
            .configure(routes)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
