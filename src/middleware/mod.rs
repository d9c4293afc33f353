/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::apply (grant + credentials), http::apply (request-id / trace / limit / timeout)
 */
pub mod auth;
pub mod http;
