use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ErrorResponse;
use crate::services::keycloak::verifier::GrantError;

/// Strategy invoked when a presented bearer token fails verification.
///
/// - `Some(response)`: the request ends here with that response
/// - `None`: the request continues without a grant (anonymous)
pub trait AccessDenied: Send + Sync {
    fn on_denied(&self, err: &GrantError) -> Option<Response>;
}

/// Default: reject with 403 `Access denied`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAccessDenied;

impl AccessDenied for RejectAccessDenied {
    fn on_denied(&self, err: &GrantError) -> Option<Response> {
        tracing::warn!(error = %err, "access denied");
        Some(
            (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::single("Access denied")),
            )
                .into_response(),
        )
    }
}

/// Override: log and let the request through without a grant.
/// Downstream decides whether anonymous access is acceptable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinueAccessDenied;

impl AccessDenied for ContinueAccessDenied {
    fn on_denied(&self, err: &GrantError) -> Option<Response> {
        tracing::info!(error = %err, "access denied");
        None
    }
}
