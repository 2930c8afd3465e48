use std::sync::Arc;

use casting_auth::TokenVerifier;
use casting_config::{AuthConfig, CorsConfig, DatabaseConfig, ServerConfig, StorageBackend};
use casting_db::{CastingStore, MemoryStore, PgStore, init_db_pool};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CastingStore>,
    pub verifier: Arc<TokenVerifier>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CastingStore>,
        verifier: TokenVerifier,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            verifier: Arc::new(verifier),
            cors_config,
        }
    }
}

pub async fn init_app_state(
    server_config: &ServerConfig,
    auth_config: &AuthConfig,
) -> anyhow::Result<AppState> {
    let store: Arc<dyn CastingStore> = match server_config.storage {
        StorageBackend::Postgres => {
            let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
            let store = PgStore::new(pool);
            store.migrate().await?;
            Arc::new(store)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    if !auth_config.is_configured() {
        warn!("AUTH0_DOMAIN or API_AUDIENCE is not set, every protected request will be rejected");
    }

    let verifier = TokenVerifier::from_config(auth_config);
    info!(
        storage = store.backend(),
        issuer = verifier.issuer(),
        audience = verifier.audience(),
        "Application state ready"
    );

    Ok(AppState::new(store, verifier, CorsConfig::from_env()))
}
