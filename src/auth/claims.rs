use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed session payload carried in the `session` cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // operator username
    pub jti: Uuid,   // session id, logged on sign-in
    pub iat: usize,  // issued at (unix timestamp)
    pub exp: usize,  // expires at (unix timestamp)
    pub iss: String, // issuer
    pub aud: String, // audience
}
