use std::time::Duration;

use anyhow::Context;
use axum::{
    extract::FromRef,
    http::{header, HeaderMap},
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use super::{claims::SessionClaims, password::verify_password};
use crate::{
    config::{CredentialConfig, SessionConfig},
    state::AppState,
};

pub const SESSION_COOKIE: &str = "session";

/// Signing and verification material for session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
    pub username: String,
}

impl SessionKeys {
    pub fn new(session: &SessionConfig, credentials: &CredentialConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(session.secret.as_bytes()),
            decoding: DecodingKey::from_secret(session.secret.as_bytes()),
            issuer: session.issuer.clone(),
            audience: session.audience.clone(),
            ttl: Duration::from_secs(
                u64::try_from(session.ttl_minutes)
                    .unwrap_or(0)
                    .saturating_mul(60),
            ),
            username: credentials.username.clone(),
        }
    }

    pub fn sign(&self, username: &str) -> anyhow::Result<(String, SessionClaims)> {
        let now = OffsetDateTime::now_utc();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|secs| now.checked_add(TimeDuration::seconds(secs)))
            .context("session ttl out of range")?;
        let claims = SessionClaims {
            sub: username.to_string(),
            jti: Uuid::new_v4(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(session_id = %claims.jti, "session signed");
        Ok((token, claims))
    }

    /// Checks signature, expiry, issuer, audience and that the subject is the
    /// configured operator.
    pub fn verify(&self, token: &str) -> anyhow::Result<SessionClaims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<SessionClaims>(token, &self.decoding, &validation)?;
        if data.claims.sub != self.username {
            anyhow::bail!("session subject does not match operator");
        }
        Ok(data.claims)
    }

    /// Accepts the request when any token it carries verifies. `Ok(None)`
    /// means no token was presented at all.
    pub fn verify_headers(&self, headers: &HeaderMap) -> anyhow::Result<Option<SessionClaims>> {
        let tokens = session_tokens(headers);
        let mut last_err = None;
        for token in &tokens {
            match self.verify(token) {
                Ok(claims) => return Ok(Some(claims)),
                Err(e) => last_err = Some(e),
            }
        }
        match last_err {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        SessionKeys::new(&state.config.session, &state.config.credentials)
    }
}

/// Compares a submitted username/password pair against the configured operator.
pub fn check_credentials(
    credentials: &CredentialConfig,
    username: &str,
    password: &str,
) -> anyhow::Result<bool> {
    if username != credentials.username {
        return Ok(false);
    }
    verify_password(password, &credentials.password_hash)
}

pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        ttl.as_secs()
    )
}

pub fn cleared_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Every session token the request carries: an explicit bearer token first,
/// then the `session` cookie.
pub fn session_tokens(headers: &HeaderMap) -> Vec<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    let cookies = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| {
            pair.trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
                .filter(|token| !token.is_empty())
                .map(str::to_string)
        });

    bearer.into_iter().chain(cookies).collect()
}
