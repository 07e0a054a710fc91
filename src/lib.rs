pub mod config;
pub mod data;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod report;
pub mod services;
pub mod utils;
