/*
 * Responsibility
 * - handler 向け extractor の公開
 */
pub mod credentials;

pub use credentials::{CurrentCredentials, RequireCredentials};
