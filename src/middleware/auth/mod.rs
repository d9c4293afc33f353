/*
 * Responsibility
 * - /api/v1 配下に掛ける認証/認可導出の middleware を束ねる
 * - 実行順: grant (bearer 検証) → credentials (認可コンテキスト導出) → handler
 */
use axum::{Router, middleware};

use crate::state::AppState;

pub mod credentials;
pub mod grant;

/// Apply grant resolution and credential derivation to `router`.
///
/// ```ignore
/// let v1 = middleware::auth::apply(api::v1::routes(), state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    // 後から layer したものが外側 = 先に実行される
    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            credentials::credentials_middleware,
        ))
        .layer(middleware::from_fn_with_state(state, grant::grant_middleware))
}
