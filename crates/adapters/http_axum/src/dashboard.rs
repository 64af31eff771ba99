//! Server-side rendered dashboard (no JavaScript).

use axum::Router;
use axum::extract::{Form, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};

use snutz_app::ports::DashboardApi;
use snutz_domain::command::CommandForm;

use crate::error::DashboardError;
use crate::page::{render_frame, render_page};
use crate::state::AppState;

/// Build the dashboard sub-router.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: DashboardApi + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<A>))
        .route("/frames/devices", get(devices_frame::<A>))
        .route("/frames/results", get(results_frame::<A>))
        .route("/commands", post(submit_command::<A>))
}

/// `GET /`: the dashboard shell.
///
/// The query string, if any, prefills the command form. Pending alerts are
/// shown once and then dropped.
///
/// # Errors
///
/// Returns a 500 if the page fails to render.
pub async fn index<A>(
    State(state): State<AppState<A>>,
    Query(form): Query<CommandForm>,
) -> Result<Html<String>, DashboardError>
where
    A: DashboardApi + Send + Sync + 'static,
{
    let snapshot = state.regions.snapshot();
    let alerts = state.regions.take_alerts();
    Ok(Html(render_page(&snapshot, &alerts, &form)?))
}

/// `GET /frames/devices`: the devices card, reloading itself every poll
/// interval. Alerts raised by polling show up here.
///
/// # Errors
///
/// Returns a 500 if the frame fails to render.
pub async fn devices_frame<A>(
    State(state): State<AppState<A>>,
) -> Result<Html<String>, DashboardError>
where
    A: DashboardApi + Send + Sync + 'static,
{
    let devices = state.regions.snapshot().devices;
    let alerts = state.regions.take_alerts();
    Ok(Html(render_frame(&devices, &alerts, state.refresh_seconds)?))
}

/// `GET /frames/results`: the results card, reloading itself every poll
/// interval.
///
/// # Errors
///
/// Returns a 500 if the frame fails to render.
pub async fn results_frame<A>(
    State(state): State<AppState<A>>,
) -> Result<Html<String>, DashboardError>
where
    A: DashboardApi + Send + Sync + 'static,
{
    let results = state.regions.snapshot().results;
    Ok(Html(render_frame(&results, &[], state.refresh_seconds)?))
}

/// `POST /commands`: submit the command form, then redirect to `/` with the
/// submitted values in the query string.
///
/// The outcome, success or failure, is reported as an alert on the next page.
pub async fn submit_command<A>(
    State(state): State<AppState<A>>,
    Form(form): Form<CommandForm>,
) -> Redirect
where
    A: DashboardApi + Send + Sync + 'static,
{
    let location = match serde_urlencoded::to_string(&form) {
        Ok(query) => format!("/?{query}"),
        Err(err) => {
            tracing::warn!(%err, "failed to encode form for redirect");
            "/".to_string()
        }
    };
    // already logged and queued as an alert by the submitter
    let _ = state.submitter.submit(form).await;
    Redirect::to(&location)
}
