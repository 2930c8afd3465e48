use casting_agency::logging::init_tracing;
use casting_agency::router::init_router;
use casting_agency::state::init_app_state;
use casting_config::{AuthConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env();

    let state = init_app_state(&server_config, &auth_config).await?;

    if auth_config.is_configured() {
        match state.verifier.keys().refresh_now().await {
            Ok(keys) => info!(keys, "Signing keys prefetched"),
            Err(e) => warn!(error = %e, "Could not prefetch signing keys, will retry on demand"),
        }
    }

    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app).await?;
    Ok(())
}
