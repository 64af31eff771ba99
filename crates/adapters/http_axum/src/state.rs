//! Shared application state for axum handlers.

use std::sync::Arc;

use snutz_app::ports::DashboardApi;
use snutz_app::services::command_submitter::CommandSubmitter;

use crate::regions::DashboardRegions;

/// Command submitter whose alerts land in the dashboard document.
pub type DashboardSubmitter<A> = CommandSubmitter<A, Arc<DashboardRegions>>;

/// Application state shared across all axum handlers.
///
/// Generic over the backend API type to avoid dynamic dispatch.
/// `Clone` is implemented manually so `A` itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<A> {
    /// The dashboard document the poller writes into.
    pub regions: Arc<DashboardRegions>,
    /// Command form use-case.
    pub submitter: Arc<DashboardSubmitter<A>>,
    /// Value of the page's `<meta http-equiv="refresh">`, in seconds.
    pub refresh_seconds: u64,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            regions: Arc::clone(&self.regions),
            submitter: Arc::clone(&self.submitter),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<A> AppState<A>
where
    A: DashboardApi + Send + Sync + 'static,
{
    /// Create the state, wiring a command submitter that alerts into `regions`.
    pub fn new(api: A, regions: Arc<DashboardRegions>, refresh_seconds: u64) -> Self {
        let submitter = CommandSubmitter::new(api, Arc::clone(&regions));
        Self {
            regions,
            submitter: Arc::new(submitter),
            refresh_seconds,
        }
    }
}
