use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection pool settings for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Build a `postgres://` URL from discrete connection settings.
    pub fn from_parts(host: &str, port: u16, user: &str, password: &str, name: &str) -> Self {
        Self {
            url: format!("postgres://{user}:{password}@{host}:{port}/{name}"),
            max_connections: 10,
            min_connections: 1,
        }
    }

    /// URL with the password replaced, safe for logs.
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &self.url[scheme_end + 3..at];
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{}{user}:***{}", &self.url[..scheme_end + 3], &self.url[at..])
            }
            _ => self.url.clone(),
        }
    }
}

/// Open the shared connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!(url = %config.redacted_url(), "Connecting to database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!(
        "Database connected (pool: {}..{})",
        config.min_connections,
        config.max_connections
    );

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_builds_url() {
        let config = DatabaseConfig::from_parts("localhost", 5432, "postgres", "pw", "blog");
        assert_eq!(config.url, "postgres://postgres:pw@localhost:5432/blog");
    }

    #[test]
    fn test_redacted_url_hides_password() {
        let config = DatabaseConfig::from_parts("db", 5432, "blogger", "s3cr3t", "blog");
        assert_eq!(config.redacted_url(), "postgres://blogger:***@db:5432/blog");
    }

    #[test]
    fn test_redacted_url_without_credentials() {
        let config = DatabaseConfig {
            url: "postgres://db/blog".to_string(),
            max_connections: 1,
            min_connections: 1,
        };
        assert_eq!(config.redacted_url(), "postgres://db/blog");
    }
}
