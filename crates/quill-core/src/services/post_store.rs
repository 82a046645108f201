//! Post CRUD and slug assignment.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::slug;
use crate::domain::{Post, PostDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Owns post records on top of a [`PostRepository`].
///
/// Slug uniqueness is decided by the repository's unique constraint: a
/// write that collides is retried with the next slug candidate instead of
/// checking for the slug up front.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Every post, newest first. An empty blog is not an error.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list_newest_first().await?)
    }

    /// The `limit` newest posts.
    pub async fn recent(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.list_all().await?;
        posts.truncate(limit);
        Ok(posts)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found(slug))
    }

    pub async fn create(&self, draft: &PostDraft) -> Result<Post, DomainError> {
        let base = slug::base_slug(draft.title());

        for candidate in slug::candidates(&base, Utc::now()) {
            match self.repo.insert(draft.with_slug(&candidate)).await {
                Ok(post) => {
                    tracing::debug!(id = post.id, slug = %post.slug, "Post created");
                    return Ok(post);
                }
                Err(RepoError::Constraint(_)) => {
                    tracing::warn!(slug = %candidate, "Slug already taken, trying next candidate");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::Conflict(format!("no free slug left for `{base}`")))
    }

    /// Rewrite title, content and slug of the post at `current_slug`.
    ///
    /// The new slug goes through the same collision handling as [`create`](Self::create).
    /// A post whose current slug already derives from the new title keeps it.
    pub async fn update(&self, current_slug: &str, draft: &PostDraft) -> Result<Post, DomainError> {
        let base = slug::base_slug(draft.title());

        let mut attempts = slug::candidates(&base, Utc::now());
        if slug::is_variant_of(current_slug, &base) {
            attempts.retain(|c| c != current_slug);
            attempts.insert(0, current_slug.to_string());
        }

        for candidate in attempts {
            match self
                .repo
                .update_by_slug(current_slug, draft.with_slug(&candidate))
                .await
            {
                Ok(Some(post)) => {
                    tracing::debug!(id = post.id, from = %current_slug, to = %post.slug, "Post updated");
                    return Ok(post);
                }
                Ok(None) => return Err(DomainError::not_found(current_slug)),
                Err(RepoError::Constraint(_)) => {
                    tracing::warn!(slug = %candidate, "Slug already taken, trying next candidate");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::Conflict(format!("no free slug left for `{base}`")))
    }

    pub async fn delete(&self, slug: &str) -> Result<(), DomainError> {
        let removed = self.repo.delete_by_slug(slug).await?;
        if removed == 0 {
            return Err(DomainError::not_found(slug));
        }

        tracing::debug!(slug = %slug, "Post deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        Ok(self.repo.ping().await?)
    }
}
