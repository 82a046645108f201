//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use quill_core::ports::{ContentRenderer, PostRepository};
use quill_core::{PostStore, SessionIssuer};
use quill_infra::database::connect;
use quill_infra::{
    InMemoryPostRepository, JwtTokenService, MarkdownRenderer, PostgresPostRepository,
    StaticCredentials,
};

use crate::config::{AppConfig, AuthConfig, Storage};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub sessions: SessionIssuer,
    pub renderer: Arc<dyn ContentRenderer>,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>, auth: &AuthConfig) -> Self {
        let credentials = Arc::new(StaticCredentials::new(
            auth.admin_username.clone(),
            auth.admin_password.clone(),
        ));
        let tokens = Arc::new(JwtTokenService::new(auth.jwt.clone()));

        Self {
            posts: PostStore::new(repo),
            sessions: SessionIssuer::new(credentials, tokens),
            renderer: Arc::new(MarkdownRenderer::new()),
        }
    }

    /// State backed by a process-local post table.
    pub fn in_memory(auth: &AuthConfig) -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()), auth)
    }

    /// Build the application state from configuration.
    ///
    /// With Postgres storage this connects, applies pending migrations and
    /// fails if the database is unreachable.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        match config.storage {
            Storage::Postgres => {
                let db = connect(&config.database)
                    .await
                    .context("failed to connect to database")?;
                Migrator::up(&db, None)
                    .await
                    .context("failed to apply database migrations")?;

                Ok(Self::new(Arc::new(PostgresPostRepository::new(db)), &config.auth))
            }
            Storage::Memory => {
                tracing::warn!("STORAGE=memory. Posts will be lost on restart.");
                Ok(Self::in_memory(&config.auth))
            }
        }
    }
}
