use axum::{routing::get, Router};
use demo_kit::{bootstrap, ServerConfig};
use utoipa::OpenApi;

pub mod auth;
pub mod dtos;
pub mod handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "demo-service", description = "Greeting, addition and mock login endpoints."),
    paths(handlers::greet, handlers::add, auth::login),
    components(schemas(dtos::LoginForm, demo_kit::ErrorBody, demo_kit::FieldError)),
    tags(
        (name = "greeting", description = "Stateless greeting and math endpoints"),
        (name = "auth", description = "Mock authentication")
    )
)]
pub struct ApiDoc;

pub fn build_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// The REST routes alone, without docs or middleware.
pub fn app_router() -> Router {
    Router::new()
        .route("/greet", get(handlers::greet))
        .route("/add", get(handlers::add))
        .nest(auth::AUTH_PREFIX, auth::router())
}

/// REST routes plus API docs and the CORS layer.
pub fn build_app() -> Router {
    #[allow(unused_mut)]
    let mut app = app_router();

    #[cfg(feature = "swagger-ui")]
    {
        app = app.merge(bootstrap::swagger_router(build_openapi_spec()));
    }

    app.layer(bootstrap::default_cors_layer())
}

/// Starts the web server.
pub async fn run_server(config: ServerConfig) -> demo_kit::Result<()> {
    bootstrap::serve(build_app(), &config).await
}
