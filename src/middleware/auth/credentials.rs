//! `Grant` → `Credentials` in request extensions, or a 401/403 response.
//!
//! - no grant: pass through with no credentials (anonymous)
//! - derivation ok: attach credentials, continue
//! - derivation failed: stop here; downstream never runs
//!
//! Derivation runs inside the request future, so a request dropped by the
//! transport while the lookup is pending never gets credentials attached.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::services::credentials::{DeriveError, derive_credentials};
use crate::services::keycloak::Grant;
use crate::state::AppState;

pub async fn credentials_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(grant) = req.extensions().get::<Grant>().cloned() else {
        return Ok(next.run(req).await);
    };

    let credentials = match derive_credentials(&grant, state.permissions.as_ref()).await {
        Ok(credentials) => credentials,
        Err(err) => {
            match &err {
                DeriveError::Unauthorized { user_id } => {
                    tracing::warn!(user_id = %user_id, "no permissions for user");
                }
                DeriveError::Forbidden { detail } => {
                    tracing::warn!(error = %detail, "credential derivation failed");
                }
            }
            return Err(err.into());
        }
    };

    tracing::debug!(
        role = ?credentials.role(),
        user_id = credentials.user_id().unwrap_or("-"),
        "credentials attached"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(credentials);

    Ok(next.run(req).await)
}
