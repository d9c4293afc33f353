/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - grants: bearer トークン → Grant
 *   - permissions: user_id → Permissions (dao / cache はこの裏側)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::services::keycloak::GrantResolver;
use crate::services::permissions::PermissionLookup;

#[derive(Clone)]
pub struct AppState {
    pub grants: Arc<GrantResolver>,
    pub permissions: Arc<dyn PermissionLookup>,
}

impl AppState {
    pub fn new(grants: Arc<GrantResolver>, permissions: Arc<dyn PermissionLookup>) -> Self {
        Self {
            grants,
            permissions,
        }
    }
}
