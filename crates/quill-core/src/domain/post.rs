use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Message shown when a submitted post is missing its title or body.
pub const MISSING_FIELDS: &str = "Title and content are required";

/// Post entity - a published blog post.
///
/// `content` holds the raw markdown source; rendering happens at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created: DateTime<Utc>,
}

/// Owner-submitted title and content that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Validate raw form input. Whitespace-only fields count as empty.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(DomainError::Validation(MISSING_FIELDS.to_string()));
        }

        Ok(Self {
            title: title.trim().to_string(),
            content,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Pair the draft with the slug chosen for it.
    pub fn with_slug(&self, slug: impl Into<String>) -> NewPost {
        NewPost {
            title: self.title.clone(),
            content: self.content.clone(),
            slug: slug.into(),
        }
    }
}

/// Column values written by an insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_accepts_filled_fields() {
        let draft = PostDraft::new("  Hello World ", "body").unwrap();
        assert_eq!(draft.title(), "Hello World");
        assert_eq!(draft.content(), "body");
    }

    #[test]
    fn test_draft_rejects_empty_fields() {
        for (title, content) in [("", "body"), ("title", ""), ("", ""), ("   ", "body"), ("t", "\n\t")] {
            let err = PostDraft::new(title, content).unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref msg) if msg == MISSING_FIELDS));
        }
    }

    #[test]
    fn test_with_slug_copies_fields() {
        let draft = PostDraft::new("Title", "Body").unwrap();
        let row = draft.with_slug("title");
        assert_eq!(row.title, "Title");
        assert_eq!(row.content, "Body");
        assert_eq!(row.slug, "title");
    }
}
