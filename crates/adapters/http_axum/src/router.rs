//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use snutz_app::ports::DashboardApi;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the dashboard at `/`, its region frames under `/frames`, and a
/// liveness check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<A>(state: AppState<A>) -> Router
where
    A: DashboardApi + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
