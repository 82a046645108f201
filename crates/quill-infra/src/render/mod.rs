//! Post content rendering.

mod markdown;

pub use markdown::MarkdownRenderer;
