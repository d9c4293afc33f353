/*
 * Responsibility
 * - middleware が導出し request extensions に載せる「認可コンテキスト」の型
 * - handler はこの型だけを見て認可判断する (identity の再導出はしない)
 *
 * Notes
 * - 生成後は不変。フィールドは読み取り専用で公開する
 */
use serde::Serialize;

use crate::services::permissions::Permissions;

/// `None` means "authenticated but not elevated", not "anonymous".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    role: Role,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    permissions: Permissions,
}

impl Credentials {
    /// Admins bypass granular checks, so they carry no permission mapping.
    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            user_id: None,
            permissions: Permissions::new(),
        }
    }

    pub fn user(user_id: impl Into<String>, permissions: Permissions) -> Self {
        Self {
            role: Role::None,
            user_id: Some(user_id.into()),
            permissions,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn allows(&self, scope: &str, operation: &str) -> bool {
        self.is_admin() || self.permissions.allows(scope, operation)
    }
}
