//! HTTP handlers and route configuration.

mod auth;
mod health;
mod owner;
mod public;

use actix_web::{HttpResponse, http::header, web};

/// Number of posts shown on the front page.
pub const HOME_POST_LIMIT: usize = 3;

const DASHBOARD_PATH: &str = "/owner";

/// 303 redirect, so a POSTed form is followed by a GET.
fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/", web::get().to(public::home))
        .route("/posts", web::get().to(public::list_posts))
        .route("/posts/{slug}", web::get().to(public::view_post))
        .route("/health", web::get().to(health::health_check))
        // Session routes
        .route("/login", web::get().to(auth::login_page))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::post().to(auth::logout))
        // Owner routes, gated by the `Owner` extractor
        .service(
            web::scope(DASHBOARD_PATH)
                .route("", web::get().to(owner::dashboard))
                .route("/", web::get().to(owner::dashboard))
                .route("/new", web::get().to(owner::new_post_form))
                .route("/new", web::post().to(owner::create_post))
                .route("/edit/{slug}", web::get().to(owner::edit_post_form))
                .route("/edit/{slug}", web::post().to(owner::update_post))
                .route("/delete/{slug}", web::post().to(owner::delete_post)),
        )
        .default_service(web::to(public::not_found));
}
