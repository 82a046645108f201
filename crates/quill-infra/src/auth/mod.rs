//! Authentication implementations.

mod credentials;
mod jwt;

pub use credentials::StaticCredentials;
pub use jwt::{DEFAULT_SECRET, JwtConfig, JwtTokenService};
