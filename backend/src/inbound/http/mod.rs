//! HTTP inbound adapter exposing REST endpoints.

pub mod area;
pub mod calculations;
pub mod cors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod stats;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api` route on a scope or app.
///
/// Extractor configuration is attached here so undecodable input maps to the
/// shared error payload wherever the routes are mounted.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use area_calculator::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::query_config())
        .app_data(error::path_config())
        .app_data(error::json_config())
        .service(area::calculate_square_area)
        .configure(calculations::configure)
        .service(stats::count_calculations);
}
