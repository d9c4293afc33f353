use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::config::KeycloakConfig;
use crate::services::keycloak::grant::{Grant, TokenContent};

// Errors returned by realm-key loading and bearer-token verification.
#[derive(Debug, Error)]
pub enum GrantError {
    #[error("invalid realm public key pem: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// RS256 realm-token verifier.
///
/// - Key material is intentionally not printable via Debug.
/// - Audience is not checked: this is a bearer-only public client and
///   Keycloak access tokens carry whatever `aud` the realm mappers produce.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(config: &KeycloakConfig) -> Result<Self, GrantError> {
        let decoding_key = DecodingKey::from_rsa_pem(config.realm_public_key_pem.as_bytes())
            .map_err(GrantError::InvalidKey)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[config.issuer()]);
        validation.validate_aud = false;
        validation.leeway = config.leeway_seconds;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Verify signature, `exp` and `iss`, then expose the claims as a [`Grant`].
    pub fn verify(&self, token: &str) -> Result<Grant, GrantError> {
        let data =
            jsonwebtoken::decode::<TokenContent>(token, &self.decoding_key, &self.validation)?;

        Ok(Grant::new(data.claims))
    }
}
