/*
 * Responsibility
 * - 署名検証済みトークンの claims (Grant) の型
 * - realm ロール / アプリ固有 user_id の取り出し
 *
 * Notes
 * - 署名/exp の検証は verifier 側。ここは claims を「そのまま信頼して」読むだけ
 */
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("missing 'realm_access.roles' claim")]
    MissingRealmRoles,
    #[error("malformed 'realm_access.roles' claim")]
    MalformedRealmRoles,
    #[error("missing 'lagoon.user_id' claim")]
    MissingUserId,
    #[error("malformed 'lagoon.user_id' claim")]
    MalformedUserId,
}

/// Decoded access-token claims.
///
/// Application claims are untyped here: a signed token with a misshapen claim
/// is still a grant, and the shape error surfaces from the [`Grant`] accessors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenContent {
    #[serde(default)]
    pub realm_access: Option<Value>,
    #[serde(default)]
    pub lagoon: Option<Value>,
}

/// Verified grant placed in request extensions by the grant attacher.
#[derive(Debug, Clone)]
pub struct Grant {
    pub content: TokenContent,
}

impl Grant {
    pub fn new(content: TokenContent) -> Self {
        Self { content }
    }

    pub fn realm_roles(&self) -> Result<Vec<&str>, ClaimError> {
        let roles = match &self.content.realm_access {
            None | Some(Value::Null) => None,
            Some(Value::Object(access)) => access.get("roles"),
            Some(_) => return Err(ClaimError::MalformedRealmRoles),
        };

        match roles {
            None | Some(Value::Null) => Err(ClaimError::MissingRealmRoles),
            Some(Value::Array(items)) => items
                .iter()
                .map(|r| r.as_str().ok_or(ClaimError::MalformedRealmRoles))
                .collect(),
            Some(_) => Err(ClaimError::MalformedRealmRoles),
        }
    }

    pub fn is_admin(&self) -> Result<bool, ClaimError> {
        Ok(self.realm_roles()?.contains(&ADMIN_ROLE))
    }

    /// Application user id; accepts both string and integer encodings.
    pub fn user_id(&self) -> Result<String, ClaimError> {
        let raw = match &self.content.lagoon {
            None | Some(Value::Null) => None,
            Some(Value::Object(lagoon)) => lagoon.get("user_id"),
            Some(_) => return Err(ClaimError::MalformedUserId),
        };

        match raw {
            None | Some(Value::Null) => Err(ClaimError::MissingUserId),
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
            Some(Value::Number(n)) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
            Some(_) => Err(ClaimError::MalformedUserId),
        }
    }
}
