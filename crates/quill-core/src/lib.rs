//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! Post persistence rules, slug generation and the session flow live here,
//! expressed against ports that `quill-infra` implements.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{PostStore, SessionIssuer};
