pub mod derive;
pub mod types;

pub use derive::{DeriveError, derive_credentials};
pub use types::Credentials;
