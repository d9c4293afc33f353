pub mod access_denied;
pub mod grant;
pub mod resolver;
pub mod verifier;

pub use access_denied::ContinueAccessDenied;
pub use grant::Grant;
pub use resolver::{GrantResolver, Resolution};
