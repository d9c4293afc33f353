//! Shared cache backends (Valkey) behind the `CacheClient` trait.
pub mod client;
pub mod valkey;

pub use client::CacheClient;
pub use valkey::ValkeyClient;
