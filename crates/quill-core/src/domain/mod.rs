//! Domain entities - the core business objects.

mod post;
pub mod slug;

pub use post::{NewPost, Post, PostDraft};
