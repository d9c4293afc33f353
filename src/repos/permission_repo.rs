/*
 * Responsibility
 * - user_permissions テーブル向け SQLx 操作
 * - PgPool (dao) を受け取り、ユーザーごとの scope → operations を返す
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;
use crate::services::permissions::{LookupError, PermissionLookup, Permissions};

#[derive(Debug, FromRow)]
pub struct PermissionRow {
    pub scope: String,
    pub operation: String,
}

pub async fn list_for_user(db: &PgPool, user_id: &str) -> Result<Vec<PermissionRow>, RepoError> {
    let rows = sqlx::query_as::<_, PermissionRow>(
        r#"
        SELECT scope, operation
        FROM user_permissions
        WHERE user_id = $1
        ORDER BY scope, operation
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub fn fold_rows(rows: Vec<PermissionRow>) -> Permissions {
    rows.into_iter().map(|r| (r.scope, r.operation)).collect()
}

/// Postgres-backed permission lookup.
#[derive(Clone, Debug)]
pub struct PgPermissionLookup {
    db: PgPool,
}

impl PgPermissionLookup {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PermissionLookup for PgPermissionLookup {
    async fn permissions_for_user(&self, user_id: &str) -> Result<Permissions, LookupError> {
        let rows = list_for_user(&self.db, user_id).await?;
        Ok(fold_rows(rows))
    }
}
