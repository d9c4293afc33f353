/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - Display はそのまま 403 メッセージに載るので、元のエラー文言を透過させる
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}
