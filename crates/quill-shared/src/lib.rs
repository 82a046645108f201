//! # Quill Shared
//!
//! Plain data exchanged between the HTTP layer and the browser:
//! submitted forms and the health payload.

pub mod dto;

pub use dto::{HealthResponse, LoginForm, PostForm};
