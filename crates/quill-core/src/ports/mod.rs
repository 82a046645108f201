//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod render;
mod repository;

pub use auth::{AuthError, Authenticator, SessionClaims, TokenService};
pub use render::ContentRenderer;
pub use repository::PostRepository;
