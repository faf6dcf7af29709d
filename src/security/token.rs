use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::auth::AuthConfig;
use crate::errors::HttpError;

/// Claims carried by a bearer token.
///
/// The subject is the user id as a string to avoid numeric-type ambiguity
/// across serialization boundaries; callers parse it back to the domain id.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Issues and verifies signed, expiring bearer tokens.
///
/// Tokens are self-contained HMAC-SHA-256 signatures over `{sub, exp}`;
/// nothing is persisted and there is no server-side revocation. The keys
/// are derived once from the configured secret and shared for the lifetime
/// of the process.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            lifetime: Duration::seconds(config.token_lifetime as i64),
        }
    }

    /// Issue a token for `subject`, expiring after the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, HttpError> {
        self.issue_at(subject, Utc::now() + self.lifetime)
    }

    /// Issue a token for `subject` with an explicit expiry.
    pub fn issue_at(&self, subject: &str, expires_at: DateTime<Utc>) -> Result<String, HttpError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| HttpError::Internal(anyhow::anyhow!("failed to sign token: {e}")))
    }

    /// Verify a token and return its subject.
    ///
    /// Invalid signature, malformed structure, and passed expiry all
    /// collapse into the same unauthorized error; the cause is logged, not
    /// returned.
    pub fn verify(&self, token: &str) -> Result<String, HttpError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");

                HttpError::unauthorized("Invalid or expired token")
            })
    }
}
