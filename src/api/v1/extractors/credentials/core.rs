use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::credentials::Credentials;

/// Credentials attached by the auth middleware, or `None` for anonymous
/// requests. Never rejects.
#[derive(Debug, Clone)]
pub struct CurrentCredentials(pub Option<Credentials>);

impl<S> FromRequestParts<S> for CurrentCredentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentCredentials(
            parts.extensions.get::<Credentials>().cloned(),
        ))
    }
}

/// Handler で認証済み Credentials を必須にするための extractor
/// 見つからない場合は 401 を返す（匿名リクエスト・ミドルウェア未設定）
#[derive(Debug, Clone)]
pub struct RequireCredentials(pub Credentials);

impl<S> FromRequestParts<S> for RequireCredentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Credentials>()
            .cloned()
            .map(RequireCredentials)
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".into()))
    }
}
