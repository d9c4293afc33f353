/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 (GrantResolver, PermissionLookup) → Router 組み立て
 * - Middleware の適用 (HTTP 共通 / grant + credentials)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::{Config, KeycloakConfig},
    middleware::{self, http::HttpLimits},
    repos::permission_repo::PgPermissionLookup,
    services::{
        cache::ValkeyClient,
        keycloak::{ContinueAccessDenied, GrantResolver, verifier::GrantError},
        permissions::{CachedPermissionLookup, PermissionLookup},
    },
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,auth_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        realm = %config.keycloak.realm,
        server_url = %config.keycloak.server_url,
        client_id = %config.keycloak.client_id,
        public_client = config.keycloak.public_client,
        bearer_only = config.keycloak.bearer_only,
        "starting auth gate in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let grants = build_grant_resolver(&config.keycloak).context("building grant resolver")?;

    // Connections are opened on first use; a cold database shows up as a
    // lookup failure (403) for that request rather than a startup failure.
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(&config.database_url)
        .context("DATABASE_URL")?;

    let mut permissions: Arc<dyn PermissionLookup> = Arc::new(PgPermissionLookup::new(db));

    if let Some(redis_url) = &config.redis_url {
        let cache = ValkeyClient::new(redis_url)
            .await
            .context("connecting permission cache")?;
        permissions = Arc::new(CachedPermissionLookup::new(
            permissions,
            Arc::new(cache),
            Duration::from_secs(config.permission_cache_ttl_seconds),
        ));
        tracing::info!("permission cache enabled");
    }

    Ok(AppState::new(Arc::new(grants), permissions))
}

// Unless configured to reject, unverifiable tokens continue anonymously and
// downstream handlers decide what anonymous callers may do.
fn build_grant_resolver(keycloak: &KeycloakConfig) -> Result<GrantResolver, GrantError> {
    if keycloak.reject_invalid_tokens {
        GrantResolver::new(keycloak)
    } else {
        GrantResolver::with_access_denied(keycloak, Arc::new(ContinueAccessDenied))
    }
}

fn build_router(state: AppState, config: &Config) -> Router {
    let limits = HttpLimits {
        timeout: Duration::from_secs(config.request_timeout_seconds),
        ..HttpLimits::default()
    };

    middleware::http::apply(app_router(state), limits)
}

fn app_router(state: AppState) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    let v1 = middleware::auth::apply(api::v1::routes(), state.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", v1)
        .with_state(state)
}
