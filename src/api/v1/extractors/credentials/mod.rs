/*!
 * Credentials extractors
 *
 * Responsibility:
 * - middleware が導出した Credentials を handler に提供する
 * - 型 (Credentials) は services::credentials 側。ここは axum 依存の受け渡しのみ
 *
 * Public API:
 * - CurrentCredentials: 匿名も許可 (Option)
 * - RequireCredentials: 匿名なら 401
 */

mod core;

pub use core::{CurrentCredentials, RequireCredentials};
