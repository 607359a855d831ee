//! Token issuance and validation.
//!
//! Tokens are JWTs signed with a server-held HMAC secret. Validation accepts
//! only the HMAC family (HS256/HS384/HS512): a token whose header names any
//! other algorithm is rejected before its signature is even considered, which
//! closes the algorithm-substitution hole.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::AuthSettings, error::AppError, models::account::Account};

/// Algorithms a token may be signed with.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Number of the account the token was issued for.
    pub account_number: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,
}

/// Signs and verifies tokens with one injected secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl TokenService {
    pub fn new(settings: &AuthSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            token_ttl: settings.token_ttl,
        }
    }

    /// Sign an HS256 token for a freshly created account.
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        let ttl = i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            account_number: account.number,
            exp: Utc::now().timestamp().saturating_add(ttl),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Parse and verify a token.
    ///
    /// Malformed tokens, non-HMAC algorithms, bad signatures and expired
    /// tokens all fail with the underlying `jsonwebtoken` error so the caller
    /// can log the cause.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}
