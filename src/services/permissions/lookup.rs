//! Permission lookup interface consumed by credential derivation.
use async_trait::async_trait;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::permissions::Permissions;

/// Lookup failures. The Display text ends up in the 403 message, so keep it
/// the underlying fault's own message.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    /// Scripted failures from test doubles.
    #[cfg(test)]
    #[error("{0}")]
    Backend(String),
}

/// Resolves the permission mapping for an application user id.
///
/// Implementations own their concurrency and caching; the caller issues at
/// most one lookup per request and never retries.
#[async_trait]
pub trait PermissionLookup: Send + Sync {
    async fn permissions_for_user(&self, user_id: &str) -> Result<Permissions, LookupError>;
}
