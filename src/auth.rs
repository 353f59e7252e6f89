// src/auth.rs
// Token issuance/verification and password hashing

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{error::ApiError, models::Claims, state::AppState};

/// Issues and verifies HS256 bearer tokens signed with a process-wide
/// secret. Tokens carry only a subject and an expiry; invalidation is
/// purely time-based.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn issue(&self, username: &str) -> Result<String, ApiError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let claims = Claims {
            sub: username.to_string(),
            exp: (now + self.ttl).as_secs() as i64,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(e.to_string()))
    }

    /// Boolean gate for the API layer. The failure cases are only
    /// distinguished in the debug log.
    pub fn verify(&self, token: &str) -> bool {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(_) => true,
            Err(e) => {
                match e.kind() {
                    ErrorKind::ExpiredSignature => tracing::debug!("rejected expired token"),
                    ErrorKind::InvalidSignature => {
                        tracing::debug!("rejected token with bad signature")
                    }
                    _ => tracing::debug!("rejected malformed token: {}", e),
                }
                false
            }
        }
    }
}

/// Argon2id with a fresh random salt, encoded as a PHC string.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Bearer-token middleware for protected routes.
///
/// Rejects with 401 when the Authorization header is missing, is not of the
/// `Bearer <token>` form, or carries an invalid/expired token.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Auth("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Auth("Invalid authorization header format".to_string()))?
        .trim();

    if state.tokens.verify(token) {
        Ok(next.run(request).await)
    } else {
        Err(ApiError::Auth("Invalid or expired token".to_string()))
    }
}
