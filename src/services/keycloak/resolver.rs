/*
 * Responsibility
 * - Authorization ヘッダから bearer トークンを取り出し、検証して Grant を返す
 * - 検証失敗時の振る舞いは AccessDenied フックに委ねる (自分では拒否しない)
 */
use std::sync::Arc;

use axum::http::{HeaderMap, header};
use axum::response::Response;

use crate::config::KeycloakConfig;
use crate::services::keycloak::{
    access_denied::{AccessDenied, RejectAccessDenied},
    grant::Grant,
    verifier::{GrantError, TokenVerifier},
};

/// Outcome of resolving a request's bearer token.
#[derive(Debug)]
pub enum Resolution {
    /// No bearer token was presented.
    Anonymous,
    Granted(Grant),
    /// Verification failed and the hook chose to end the request.
    Denied(Response),
}

#[derive(Clone)]
pub struct GrantResolver {
    verifier: TokenVerifier,
    access_denied: Arc<dyn AccessDenied>,
}

impl std::fmt::Debug for GrantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantResolver")
            .field("verifier", &self.verifier)
            .finish()
    }
}

impl GrantResolver {
    /// Resolver with the default hook ([`RejectAccessDenied`]).
    pub fn new(config: &KeycloakConfig) -> Result<Self, GrantError> {
        Self::with_access_denied(config, Arc::new(RejectAccessDenied))
    }

    pub fn with_access_denied(
        config: &KeycloakConfig,
        access_denied: Arc<dyn AccessDenied>,
    ) -> Result<Self, GrantError> {
        Ok(Self {
            verifier: TokenVerifier::new(config)?,
            access_denied,
        })
    }

    pub fn resolve(&self, headers: &HeaderMap) -> Resolution {
        let Some(token) = bearer_token(headers) else {
            return Resolution::Anonymous;
        };

        match self.verifier.verify(token) {
            Ok(grant) => Resolution::Granted(grant),
            Err(err) => match self.access_denied.on_denied(&err) {
                Some(resp) => Resolution::Denied(resp),
                None => Resolution::Anonymous,
            },
        }
    }
}

// `Authorization: Bearer <token>` (scheme is case-insensitive)
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
