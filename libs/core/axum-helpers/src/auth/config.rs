//! Configuration for token signing.

use core_config::{ConfigError, FromEnv};

/// Secret used when `JWT_SECRET` is unset. Only suitable for local development.
pub const DEFAULT_JWT_SECRET: &str = "jwtsecret";

/// JWT signing configuration.
///
/// Loaded from `JWT_SECRET`, falling back to [`DEFAULT_JWT_SECRET`].
#[derive(Clone)]
pub struct JwtConfig {
    /// Symmetric HMAC signing secret
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Whether the built-in development secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(Self { secret }),
            _ => {
                tracing::warn!("JWT_SECRET is not set, signing tokens with the development default");
                Ok(Self::new(DEFAULT_JWT_SECRET))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_from_env() {
        temp_env::with_var("JWT_SECRET", Some("a-real-secret"), || {
            let config = JwtConfig::from_env().unwrap();
            assert_eq!(config.secret, "a-real-secret");
            assert!(!config.uses_default_secret());
        });
    }

    #[test]
    fn test_jwt_config_falls_back_to_default() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let config = JwtConfig::from_env().unwrap();
            assert_eq!(config.secret, DEFAULT_JWT_SECRET);
            assert!(config.uses_default_secret());
        });
    }

    #[test]
    fn test_jwt_config_debug_redacts_secret() {
        let rendered = format!("{:?}", JwtConfig::new("top-secret"));
        assert!(!rendered.contains("top-secret"));
    }
}
