//! Bearer token → `Grant` in request extensions.
//!
//! This layer never rejects on its own: a missing token, or an invalid one
//! when the access-denied hook lets it through, simply leaves the grant
//! absent. Credential derivation runs after it.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::services::keycloak::Resolution;
use crate::state::AppState;

pub async fn grant_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match state.grants.resolve(req.headers()) {
        Resolution::Anonymous => {}
        Resolution::Granted(grant) => {
            req.extensions_mut().insert(grant);
        }
        Resolution::Denied(resp) => return resp,
    }

    next.run(req).await
}
