//! Grant → Credentials decision procedure.
//!
//! Pure with respect to its inputs: the only side effect is the single
//! permission lookup for non-admin grants. The HTTP adapter lives in
//! `middleware::auth::credentials`.

use thiserror::Error;

use crate::services::credentials::Credentials;
use crate::services::keycloak::Grant;
use crate::services::permissions::PermissionLookup;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// Authenticated, not admin, and no permissions at all.
    #[error("Unauthorized - No permissions for user id {user_id}")]
    Unauthorized { user_id: String },
    /// Any fault while reading claims or looking up permissions.
    #[error("Forbidden - Invalid Keycloak Token: {detail}")]
    Forbidden { detail: String },
}

impl DeriveError {
    fn forbidden(err: impl std::fmt::Display) -> Self {
        Self::Forbidden {
            detail: err.to_string(),
        }
    }
}

pub async fn derive_credentials(
    grant: &Grant,
    lookup: &dyn PermissionLookup,
) -> Result<Credentials, DeriveError> {
    if grant.is_admin().map_err(DeriveError::forbidden)? {
        return Ok(Credentials::admin());
    }

    let user_id = grant.user_id().map_err(DeriveError::forbidden)?;

    let permissions = lookup
        .permissions_for_user(&user_id)
        .await
        .map_err(DeriveError::forbidden)?;

    if permissions.is_empty() {
        return Err(DeriveError::Unauthorized { user_id });
    }

    Ok(Credentials::user(user_id, permissions))
}
