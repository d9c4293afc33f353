pub mod cached;
pub mod lookup;
pub mod types;

pub use cached::CachedPermissionLookup;
pub use lookup::{LookupError, PermissionLookup};
pub use types::Permissions;
