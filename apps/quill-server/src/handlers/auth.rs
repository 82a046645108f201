//! Login and logout handlers.

use actix_web::{HttpResponse, http::StatusCode, http::header, web};

use quill_core::ports::AuthError;
use quill_shared::LoginForm;

use crate::middleware::auth::{MaybeOwner, cleared_session_cookie, session_cookie};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{LoginTemplate, render};

pub const INVALID_LOGIN: &str = "Invalid username or password";

/// GET /login
pub async fn login_page(viewer: MaybeOwner) -> AppResult<HttpResponse> {
    render(
        &LoginTemplate {
            is_owner: viewer.is_owner(),
            username: String::new(),
            error: None,
        },
        StatusCode::OK,
    )
}

/// POST /login
pub async fn login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    match state.sessions.login(&form.username, &form.password) {
        Ok(token) => {
            tracing::debug!(username = %form.username, "Session cookie issued");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/owner"))
                .cookie(session_cookie(token, state.sessions.lifetime_seconds()))
                .finish())
        }
        Err(AuthError::InvalidCredentials) => render(
            &LoginTemplate {
                is_owner: false,
                username: form.username,
                error: Some(INVALID_LOGIN.to_string()),
            },
            StatusCode::UNAUTHORIZED,
        ),
        Err(e) => Err(e.into()),
    }
}

/// POST /logout
pub async fn logout() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(cleared_session_cookie())
        .finish()
}
