pub mod error;
pub mod permission_repo;
