/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, Keycloak realm/client, cache など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - Grant Resolver に渡す KeycloakConfig を組み立てる (グローバル状態は持たない)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use url::Url;

const DEFAULT_KEYCLOAK_URL: &str = "http://docker.for.mac.localhost:8088/auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Identity-provider settings handed to the grant resolver at startup.
///
/// The service is a bearer-only public client: it never starts a login flow,
/// it only verifies tokens issued by the realm.
#[derive(Debug, Clone)]
pub struct KeycloakConfig {
    pub realm: String,
    pub server_url: String,
    pub client_id: String,
    pub public_client: bool,
    pub bearer_only: bool,
    pub realm_public_key_pem: String,
    pub leeway_seconds: u64,
    /// `true`: unverifiable tokens get 403. `false`: they continue anonymously.
    pub reject_invalid_tokens: bool,
}

impl KeycloakConfig {
    /// `iss` claim every accepted token must carry.
    pub fn issuer(&self) -> String {
        format!("{}/realms/{}", self.server_url.trim_end_matches('/'), self.realm)
    }
}

/// Pick the identity-provider base URL.
///
/// An explicit URL wins; otherwise the first route containing `keycloak-`
/// is used as `<route>/auth`; otherwise the local development default.
pub fn resolve_server_url(explicit: Option<&str>, routes: Option<&str>) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return url.to_string();
    }

    routes
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .find(|route| route.contains("keycloak-"))
        .map(|route| format!("{}/auth", route.trim_end_matches('/')))
        .unwrap_or_else(|| DEFAULT_KEYCLOAK_URL.to_string())
}

/// Keycloak publishes the realm key as bare base64 DER; accept that or a full PEM.
pub fn normalize_public_key(raw: &str) -> String {
    let raw = raw.trim().replace("\\n", "\n");
    if raw.starts_with("-----BEGIN") {
        return raw;
    }

    let body = raw
        .as_bytes()
        .chunks(64)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    format!("-----BEGIN PUBLIC KEY-----\n{body}\n-----END PUBLIC KEY-----\n")
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub request_timeout_seconds: u64,

    pub database_url: String,

    pub redis_url: Option<String>,
    pub permission_cache_ttl_seconds: u64,

    pub keycloak: KeycloakConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let request_timeout_seconds = std::env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(30);

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let redis_url = std::env::var("REDIS_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let permission_cache_ttl_seconds = std::env::var("PERMISSION_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        let server_url = resolve_server_url(
            std::env::var("KEYCLOAK_URL").ok().as_deref(),
            std::env::var("LAGOON_ROUTES").ok().as_deref(),
        );
        Url::parse(&server_url).map_err(|_| ConfigError::Invalid("KEYCLOAK_URL"))?;

        let realm_public_key_pem = std::env::var("KEYCLOAK_REALM_PUBLIC_KEY")
            .map_err(|_| ConfigError::Missing("KEYCLOAK_REALM_PUBLIC_KEY"))?;

        let leeway_seconds = std::env::var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        let reject_invalid_tokens = std::env::var("KEYCLOAK_REJECT_INVALID_TOKENS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let keycloak = KeycloakConfig {
            realm: std::env::var("KEYCLOAK_REALM").unwrap_or_else(|_| "lagoon".to_string()),
            server_url,
            client_id: std::env::var("KEYCLOAK_CLIENT_ID")
                .unwrap_or_else(|_| "lagoon-ui".to_string()),
            public_client: true,
            bearer_only: true,
            realm_public_key_pem: normalize_public_key(&realm_public_key_pem),
            leeway_seconds,
            reject_invalid_tokens,
        };

        Ok(Self {
            addr,
            app_env,
            request_timeout_seconds,
            database_url,
            redis_url,
            permission_cache_ttl_seconds,
            keycloak,
        })
    }
}
