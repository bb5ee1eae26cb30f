use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::error::Result;

/// Path the OpenAPI document is served under when Swagger UI is mounted.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Allows any origin, method and header.
pub fn default_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serves `openapi` as JSON plus an interactive Swagger UI.
#[cfg(feature = "swagger-ui")]
pub fn swagger_router(openapi: utoipa::openapi::OpenApi) -> Router {
    utoipa_swagger_ui::SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_JSON_PATH, openapi)
        .into()
}

/// Renders an OpenAPI document as pretty JSON.
pub fn openapi_json(openapi: &utoipa::openapi::OpenApi) -> Result<String> {
    Ok(openapi.to_pretty_json()?)
}

/// Binds the configured address and serves `app` until Ctrl+C.
pub async fn serve(app: Router, config: &ServerConfig) -> Result<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    serve_listener(listener, app).await
}

/// Serves `app` on an already bound listener until Ctrl+C.
pub async fn serve_listener(listener: TcpListener, app: Router) -> Result<()> {
    let local = listener.local_addr()?;
    tracing::info!("Server running at http://{}", local);
    #[cfg(feature = "swagger-ui")]
    tracing::info!("Swagger UI available at http://{}{}", local, SWAGGER_UI_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
}
