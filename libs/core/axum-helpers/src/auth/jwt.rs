use super::config::JwtConfig;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by an issued token.
///
/// There is no `exp`: tokens do not expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Store id of the authenticated user
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Issued at (seconds since the epoch)
    pub iat: i64,
}

/// Signs bearer tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Sign a token asserting `user_id`.
    pub fn issue_token(&self, user_id: &str) -> jsonwebtoken::errors::Result<String> {
        let claims = JwtClaims {
            user_id: user_id.to_string(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Check the signature of `token` and return its claims.
    pub fn verify_token(&self, token: &str) -> jsonwebtoken::errors::Result<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        decode::<JwtClaims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }
}
