//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the database, session token and rendering integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory repository only
//! - `postgres` - PostgreSQL post repository via SeaORM
//! - `auth` - JWT session tokens + static owner credentials
//! - `markdown` - comrak markdown rendering with ammonia sanitising

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "markdown")]
pub mod render;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostRepository};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService, StaticCredentials};

#[cfg(feature = "markdown")]
pub use render::MarkdownRenderer;
