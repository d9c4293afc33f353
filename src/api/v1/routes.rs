/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /me を merge
 * - 認証 (grant + credentials) は app 側で middleware::auth::apply により v1 全体に掛ける
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    me::{check_permission, me},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
        .route("/me/permissions/{scope}/{operation}", get(check_permission))
}
