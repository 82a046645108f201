use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post persistence. Each method is a single statement against the datastore.
///
/// Implementations must enforce slug uniqueness and report a collision as
/// [`RepoError::Constraint`]; the store relies on that to pick another slug.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a row; `id` and `created` are assigned by the datastore.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite title, content and slug of the row addressed by `current_slug`.
    /// Returns `None` when no row matched.
    async fn update_by_slug(
        &self,
        current_slug: &str,
        post: NewPost,
    ) -> Result<Option<Post>, RepoError>;

    /// Returns the number of rows removed.
    async fn delete_by_slug(&self, slug: &str) -> Result<u64, RepoError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), RepoError>;
}
