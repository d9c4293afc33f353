/*
 * Responsibility
 * - GET /me: リクエストに付与された Credentials をそのまま返す (匿名なら null)
 * - GET /me/permissions/{scope}/{operation}: Credentials を使った認可判断の例
 */
use axum::{Json, extract::Path};

use crate::{
    api::v1::{
        dto::permissions::PermissionCheckResponse,
        extractors::{CurrentCredentials, RequireCredentials},
    },
    services::credentials::Credentials,
};

pub async fn me(CurrentCredentials(credentials): CurrentCredentials) -> Json<Option<Credentials>> {
    Json(credentials)
}

pub async fn check_permission(
    RequireCredentials(credentials): RequireCredentials,
    Path((scope, operation)): Path<(String, String)>,
) -> Json<PermissionCheckResponse> {
    let allowed = credentials.allows(&scope, &operation);

    Json(PermissionCheckResponse {
        scope,
        operation,
        allowed,
    })
}
