//! In-memory post repository - used when no database is configured and in tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

struct Table {
    rows: Vec<Post>,
    next_id: i32,
}

/// In-memory post table guarded by an async RwLock.
///
/// Slug uniqueness is checked under the write lock, so concurrent writers see
/// the same `Constraint` errors a database would raise.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn slug_taken(rows: &[Post], slug: &str, except_id: Option<i32>) -> bool {
        rows.iter().any(|p| p.slug == slug && Some(p.id) != except_id)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        // Ties on `created` fall back to insertion order.
        rows.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.slug == slug).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        if Self::slug_taken(&table.rows, &post.slug, None) {
            return Err(RepoError::Constraint(format!("slug `{}` exists", post.slug)));
        }

        let row = Post {
            id: table.next_id,
            title: post.title,
            content: post.content,
            slug: post.slug,
            created: Utc::now(),
        };
        table.next_id += 1;
        table.rows.push(row.clone());

        Ok(row)
    }

    async fn update_by_slug(
        &self,
        current_slug: &str,
        post: NewPost,
    ) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;

        let Some(index) = table.rows.iter().position(|p| p.slug == current_slug) else {
            return Ok(None);
        };
        let id = table.rows[index].id;

        if Self::slug_taken(&table.rows, &post.slug, Some(id)) {
            return Err(RepoError::Constraint(format!("slug `{}` exists", post.slug)));
        }

        let row = &mut table.rows[index];
        row.title = post.title;
        row.content = post.content;
        row.slug = post.slug;

        Ok(Some(row.clone()))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.slug != slug);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
