//! The owner gate: session cookie extractors.

use actix_web::{
    FromRequest, HttpRequest,
    cookie::{Cookie, SameSite, time::Duration},
    dev::Payload,
    web,
};
use std::future::{Ready, ready};

use quill_core::ports::{AuthError, SessionClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// The authenticated blog owner.
///
/// Use this in handlers to gate them behind a valid session; visitors
/// without one are redirected to the login page before the handler runs:
/// ```ignore
/// async fn dashboard(owner: Owner) -> impl Responder {
///     format!("Hello, {}!", owner.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Owner {
    pub username: String,
}

impl From<SessionClaims> for Owner {
    fn from(claims: SessionClaims) -> Self {
        Self {
            username: claims.username,
        }
    }
}

fn authenticate(req: &HttpRequest) -> Result<Owner, AuthError> {
    let state = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state,
        None => {
            tracing::error!("AppState not found in app data");
            return Err(AuthError::InvalidToken("Server configuration error".to_string()));
        }
    };

    let cookie = req.cookie(SESSION_COOKIE).ok_or(AuthError::MissingToken)?;
    if cookie.value().is_empty() {
        return Err(AuthError::MissingToken);
    }

    state.sessions.validate(cookie.value()).map(Owner::from)
}

impl FromRequest for Owner {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(|err| {
            tracing::debug!(path = %req.path(), reason = %err, "Owner gate rejected request");
            AppError::Unauthorized
        }))
    }
}

/// Optional owner extractor - public pages use it to decide which links to show.
pub struct MaybeOwner(pub Option<Owner>);

impl MaybeOwner {
    pub fn is_owner(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for MaybeOwner {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeOwner(authenticate(req).ok())))
    }
}

/// Cookie that stores a freshly issued session token.
pub fn session_cookie(token: String, lifetime_seconds: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(lifetime_seconds))
        .finish()
}

/// Cookie that tells the browser to drop the session.
pub fn cleared_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
