//! Askama view models and page templates.

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use askama::Template;
use quill_core::domain::Post;
use quill_shared::PostForm;

use crate::middleware::error::AppResult;

/// A post as listed on the home page, the archive and the dashboard.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub title: String,
    pub slug: String,
    pub published: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            published: post.created.format("%B %-d, %Y").to_string(),
        }
    }
}

pub fn summaries(posts: &[Post]) -> Vec<PostSummary> {
    posts.iter().map(PostSummary::from).collect()
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub is_owner: bool,
    pub posts: Vec<PostSummary>,
}

#[derive(Template)]
#[template(path = "posts/list.html")]
pub struct PostListTemplate {
    pub is_owner: bool,
    pub posts: Vec<PostSummary>,
}

#[derive(Template)]
#[template(path = "posts/single.html")]
pub struct PostTemplate {
    pub is_owner: bool,
    pub post: PostSummary,
    /// Sanitised HTML produced by the content renderer.
    pub body_html: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub is_owner: bool,
    pub username: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub is_owner: bool,
    pub username: String,
    pub posts: Vec<PostSummary>,
}

/// Shared by the new-post and edit-post pages.
#[derive(Template)]
#[template(path = "admin/post_form.html")]
pub struct PostFormTemplate {
    pub is_owner: bool,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub form: PostForm,
    pub error: Option<String>,
}

impl PostFormTemplate {
    pub fn new_post(form: PostForm) -> Self {
        Self {
            is_owner: true,
            heading: "New post".to_string(),
            action: "/owner/new".to_string(),
            submit_label: "Publish".to_string(),
            form,
            error: None,
        }
    }

    pub fn edit_post(slug: &str, form: PostForm) -> Self {
        Self {
            is_owner: true,
            heading: "Edit post".to_string(),
            action: format!("/owner/edit/{slug}"),
            submit_label: "Save changes".to_string(),
            form,
            error: None,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub is_owner: bool,
    pub status: u16,
    pub heading: String,
    pub message: String,
}

/// Render `template` as an HTML response with `status`.
pub fn render<T: Template>(template: &T, status: StatusCode) -> AppResult<HttpResponse> {
    let body = template.render()?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
