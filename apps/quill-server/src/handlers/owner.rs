//! Owner dashboard and post management. Every handler here sits behind [`Owner`].

use actix_web::{HttpResponse, http::StatusCode, web};

use quill_core::DomainError;
use quill_core::domain::PostDraft;
use quill_shared::PostForm;

use super::{DASHBOARD_PATH, see_other};
use crate::middleware::auth::Owner;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{DashboardTemplate, PostFormTemplate, render, summaries};

/// GET /owner
pub async fn dashboard(state: web::Data<AppState>, owner: Owner) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    render(
        &DashboardTemplate {
            is_owner: true,
            username: owner.username,
            posts: summaries(&posts),
        },
        StatusCode::OK,
    )
}

/// GET /owner/new
pub async fn new_post_form(_owner: Owner) -> AppResult<HttpResponse> {
    render(&PostFormTemplate::new_post(PostForm::default()), StatusCode::OK)
}

/// POST /owner/new
pub async fn create_post(
    state: web::Data<AppState>,
    _owner: Owner,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let draft = match PostDraft::new(form.title.as_str(), form.content.as_str()) {
        Ok(draft) => draft,
        Err(DomainError::Validation(message)) => {
            return render(
                &PostFormTemplate::new_post(form).with_error(message),
                StatusCode::BAD_REQUEST,
            );
        }
        Err(e) => return Err(e.into()),
    };

    let post = state.posts.create(&draft).await?;
    tracing::info!(slug = %post.slug, "Post published");

    Ok(see_other(DASHBOARD_PATH))
}

/// GET /owner/edit/{slug}
pub async fn edit_post_form(
    state: web::Data<AppState>,
    _owner: Owner,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_slug(&path.into_inner()).await?;
    let form = PostForm {
        title: post.title,
        content: post.content,
    };

    render(&PostFormTemplate::edit_post(&post.slug, form), StatusCode::OK)
}

/// POST /owner/edit/{slug}
pub async fn update_post(
    state: web::Data<AppState>,
    _owner: Owner,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let form = form.into_inner();

    let draft = match PostDraft::new(form.title.as_str(), form.content.as_str()) {
        Ok(draft) => draft,
        Err(DomainError::Validation(message)) => {
            // Editing a post that no longer exists is a 404, not a form error.
            state.posts.get_by_slug(&slug).await?;
            return render(
                &PostFormTemplate::edit_post(&slug, form).with_error(message),
                StatusCode::BAD_REQUEST,
            );
        }
        Err(e) => return Err(e.into()),
    };

    let post = state.posts.update(&slug, &draft).await?;
    tracing::info!(old_slug = %slug, slug = %post.slug, "Post updated");

    Ok(see_other(DASHBOARD_PATH))
}

/// POST /owner/delete/{slug}
pub async fn delete_post(
    state: web::Data<AppState>,
    _owner: Owner,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    state.posts.delete(&slug).await?;
    tracing::info!(slug = %slug, "Post deleted");

    Ok(see_other(DASHBOARD_PATH))
}
