//! HTTP endpoint modules.

pub mod blog;
pub mod games;
pub mod pages;

use actix_web::http::header;
use actix_web::{web, HttpResponse};

pub use blog::configure_routes as configure_blog_routes;
pub use games::configure_routes as configure_game_routes;
pub use pages::configure_routes as configure_page_routes;

/// Register every route of the application.
///
/// Shared by `main` and the integration tests so both run the exact same
/// routing table.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    configure_page_routes(cfg);
    configure_game_routes(cfg);
    configure_blog_routes(cfg);
}

/// 302 redirect, the same shape the observed system uses everywhere.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
