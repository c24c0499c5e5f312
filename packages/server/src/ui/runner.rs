//! Router construction and server startup.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    error::ServerError,
    infrastructure::provider::TwilioVideoProvider,
    ui::{
        error::handle_panic,
        handler::{check_room_status, health_check},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the application router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/video/check-room-status", post(check_room_status))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server against the Twilio provider until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let provider = TwilioVideoProvider::new(config.twilio_config())?;
    let state = Arc::new(AppState::new(Arc::new(provider)));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Room status server listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health              - Health check");
    tracing::info!("  POST /video/check-room-status - Check whether a meeting room has participants");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
