use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

use crate::services::cache::CacheClient;
use crate::services::permissions::{LookupError, PermissionLookup, Permissions};

/// Read-through cache in front of another permission lookup.
///
/// - Only non-empty mappings are cached, so a user who was just granted
///   permissions is not rejected for a whole TTL.
/// - Cache backend failures and corrupt entries fall back to the inner
///   lookup; the inner lookup stays the source of truth.
#[derive(Clone)]
pub struct CachedPermissionLookup<C: CacheClient> {
    inner: Arc<dyn PermissionLookup>,
    cache: Arc<C>,
    ttl: Duration,
    // Key prefix to avoid collisions with other cache users
    prefix: String,
}

impl<C: CacheClient> CachedPermissionLookup<C> {
    pub fn new(inner: Arc<dyn PermissionLookup>, cache: Arc<C>, ttl: Duration) -> Self {
        Self::new_with_prefix(inner, cache, ttl, "permissions:user")
    }

    pub fn new_with_prefix(
        inner: Arc<dyn PermissionLookup>,
        cache: Arc<C>,
        ttl: Duration,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            cache,
            ttl,
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, user_id: &str) -> String {
        format!("{}:{}", self.prefix, user_id)
    }

    async fn cached(&self, key: &str) -> Option<Permissions> {
        let raw = match self.cache.get_string(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(
                    backend = self.cache.backend_name(),
                    error = %err,
                    "permission cache read failed"
                );
                return None;
            }
        };

        match serde_json::from_str::<Permissions>(&raw) {
            Ok(perms) if !perms.is_empty() => Some(perms),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "corrupt permission cache entry");
                None
            }
        }
    }
}

#[async_trait]
impl<C: CacheClient> PermissionLookup for CachedPermissionLookup<C> {
    async fn permissions_for_user(&self, user_id: &str) -> Result<Permissions, LookupError> {
        let key = self.key(user_id);

        if let Some(perms) = self.cached(&key).await {
            return Ok(perms);
        }

        let perms = self.inner.permissions_for_user(user_id).await?;

        if !perms.is_empty() {
            match serde_json::to_string(&perms) {
                Ok(raw) => {
                    if let Err(err) = self.cache.set_with_ttl(&key, &raw, self.ttl).await {
                        tracing::warn!(
                            backend = self.cache.backend_name(),
                            error = %err,
                            "permission cache write failed"
                        );
                    }
                }
                Err(err) => tracing::warn!(error = %err, "permission encode failed"),
            }
        }

        Ok(perms)
    }
}
