pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use rota_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config) -> Router {
    let app_state = state::AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::assignments::list))
        .route(
            "/users/{username}",
            get(routes::assignments::get_user)
                .put(routes::assignments::add_user)
                .delete(routes::assignments::delete_user),
        )
        .route("/new", post(routes::assignments::regenerate))
        .route("/lookup", get(routes::lookup::lookup))
        .route("/delay", post(routes::delay::delay))
        .route("/swap", post(routes::swap::swap))
        .route("/webhook", post(routes::webhook::fulfill))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the rota API server.
pub async fn serve(config: Config, port: u16) -> anyhow::Result<()> {
    let app = build_router(config);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("rota server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
