use anyhow::Context;
use serde::Deserialize;

use crate::auth::password;

const DEFAULT_SESSION_TTL_MINUTES: i64 = 60 * 24 * 7;
const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// The single operator allowed to sign in.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialConfig {
    pub username: String,
    pub password_hash: String, // argon2 PHC string
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub static_dir: String,
    pub session: SessionConfig,
    pub credentials: CredentialConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://fitness.db".into());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let session = SessionConfig {
            secret: std::env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?,
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "fitplan".into()),
            audience: std::env::var("SESSION_AUDIENCE").unwrap_or_else(|_| "fitplan-web".into()),
            ttl_minutes: session_ttl_minutes(
                std::env::var("SESSION_TTL_MINUTES").ok().as_deref(),
            )?,
        };

        // A pre-computed hash wins; a plaintext password is hashed once here.
        let password_hash = match std::env::var("APP_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let plain = std::env::var("APP_PASSWORD")
                    .context("APP_PASSWORD_HASH or APP_PASSWORD must be set")?;
                password::hash_password(&plain)?
            }
        };
        let credentials = CredentialConfig {
            username: std::env::var("APP_USERNAME").unwrap_or_else(|_| "admin".into()),
            password_hash,
        };

        Ok(Self {
            database_url,
            static_dir,
            session,
            credentials,
        })
    }
}

/// Parses `SESSION_TTL_MINUTES`; unset means one week, and anything outside
/// one minute to one year is rejected.
fn session_ttl_minutes(raw: Option<&str>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SESSION_TTL_MINUTES);
    };
    let minutes: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("SESSION_TTL_MINUTES is not a number: {raw}"))?;
    if !(1..=MAX_SESSION_TTL_MINUTES).contains(&minutes) {
        anyhow::bail!(
            "SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {minutes}"
        );
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_defaults_to_one_week() {
        assert_eq!(session_ttl_minutes(None).unwrap(), 10080);
        assert_eq!(session_ttl_minutes(Some(" 30 ")).unwrap(), 30);
    }

    #[test]
    fn ttl_out_of_range_is_rejected() {
        let huge = (i64::MAX / 2).to_string();
        let err = session_ttl_minutes(Some(&huge)).unwrap_err();
        assert!(err.to_string().contains("between 1 and"));
        assert!(session_ttl_minutes(Some("0")).is_err());
        assert!(session_ttl_minutes(Some("-5")).is_err());
        assert!(session_ttl_minutes(Some("soon")).is_err());
    }
}
