//! Public pages: front page, archive and single posts.

use actix_web::{HttpResponse, http::StatusCode, web};

use super::HOME_POST_LIMIT;
use crate::middleware::auth::MaybeOwner;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{HomeTemplate, PostListTemplate, PostSummary, PostTemplate, render, summaries};

/// GET /
///
/// A datastore failure degrades to an empty list rather than an error page.
pub async fn home(state: web::Data<AppState>, viewer: MaybeOwner) -> AppResult<HttpResponse> {
    let posts = match state.posts.recent(HOME_POST_LIMIT).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load recent posts");
            Vec::new()
        }
    };

    render(
        &HomeTemplate {
            is_owner: viewer.is_owner(),
            posts: summaries(&posts),
        },
        StatusCode::OK,
    )
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>, viewer: MaybeOwner) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    render(
        &PostListTemplate {
            is_owner: viewer.is_owner(),
            posts: summaries(&posts),
        },
        StatusCode::OK,
    )
}

/// GET /posts/{slug}
pub async fn view_post(
    state: web::Data<AppState>,
    viewer: MaybeOwner,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_slug(&path.into_inner()).await?;
    let body_html = state.renderer.render(&post.content);

    render(
        &PostTemplate {
            is_owner: viewer.is_owner(),
            post: PostSummary::from(&post),
            body_html,
        },
        StatusCode::OK,
    )
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Page not found".to_string()))
}
