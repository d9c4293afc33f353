pub mod cache;
pub mod credentials;
pub mod keycloak;
pub mod permissions;
