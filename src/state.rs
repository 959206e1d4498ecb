use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{config::AppConfig, db};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.database_url).await?;
        db::init(&db).await?;
        Ok(Self { db, config })
    }

    /// Seeded in-memory database with a known operator `admin` / `secret-pass`.
    #[cfg(test)]
    pub async fn fake() -> Self {
        use crate::config::{CredentialConfig, SessionConfig};

        let db = db::connect_in_memory().await.expect("in-memory db");
        db::init(&db).await.expect("init schema");

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            static_dir: "static".into(),
            session: SessionConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
            },
            credentials: CredentialConfig {
                username: "admin".into(),
                password_hash: crate::auth::password::hash_password("secret-pass")
                    .expect("hash password"),
            },
        });
        Self { db, config }
    }
}
