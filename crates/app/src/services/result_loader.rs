//! Result loader: fetch test results and render the results table.

use snutz_domain::error::SnutzError;

use crate::ports::{Clock, DashboardApi, DashboardView, Region};
use crate::render;

/// Loads `/tests/results` into the results region.
///
/// Unlike [`DeviceLoader`](super::device_loader::DeviceLoader), failures are
/// only logged; the user is never alerted.
pub struct ResultLoader<A, V, C> {
    api: A,
    view: V,
    clock: C,
}

impl<A, V, C> ResultLoader<A, V, C>
where
    A: DashboardApi,
    V: DashboardView,
    C: Clock,
{
    /// Create a new loader from its ports.
    pub fn new(api: A, view: V, clock: C) -> Self {
        Self { api, view, clock }
    }

    /// Fetch, render and replace the results region.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or payload error that stopped the load.
    /// The region keeps its previous content in that case.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<usize, SnutzError> {
        match self.refresh().await {
            Ok(count) => Ok(count),
            Err(err) => {
                tracing::error!(%err, "failed to load test results");
                Err(err)
            }
        }
    }

    async fn refresh(&self) -> Result<usize, SnutzError> {
        let page = self.api.list_test_results().await?;
        tracing::debug!(
            rows = page.results.len(),
            count = page.count,
            "test results fetched"
        );

        let markup = render::results_section(&page.results, self.clock.now())?;
        self.view.replace(Region::Results, markup);
        Ok(page.results.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeApi, FixedClock, RecordingView, Reply, fixed_now};
    use chrono::TimeDelta;
    use snutz_domain::test_result::{TestResult, TestResults};
    use std::sync::Arc;

    fn row(id: i64, result_data: &str) -> TestResult {
        TestResult {
            id,
            device_id: "test-1".to_string(),
            test_type: "ping".to_string(),
            target: "google.com".to_string(),
            timestamp: fixed_now() - TimeDelta::seconds(7_200),
            result_data: result_data.to_string(),
        }
    }

    fn page(results: Vec<TestResult>) -> TestResults {
        let count = results.len();
        TestResults { results, count }
    }

    fn loader(
        api: &Arc<FakeApi>,
        view: &Arc<RecordingView>,
    ) -> ResultLoader<Arc<FakeApi>, Arc<RecordingView>, FixedClock> {
        ResultLoader::new(Arc::clone(api), Arc::clone(view), FixedClock(fixed_now()))
    }

    #[tokio::test]
    async fn should_render_results_with_relative_time() {
        let api = Arc::new(FakeApi::default());
        let view = Arc::new(RecordingView::default());
        api.set_results(Reply::Ok(page(vec![
            row(1, r#"{"success":true}"#),
            row(2, r#"{"success":false}"#),
        ])));

        let rendered = loader(&api, &view).load().await.unwrap();

        assert_eq!(rendered, 2);
        let html = view.get(Region::Results).unwrap();
        assert!(html.contains("<td>2 hours ago</td>"));
        assert!(html.contains(">Success</td>"));
        assert!(html.contains(">Failed</td>"));
    }

    #[tokio::test]
    async fn should_keep_previous_content_when_result_data_is_malformed() {
        let api = Arc::new(FakeApi::default());
        let view = Arc::new(RecordingView::default());
        let loader = loader(&api, &view);
        api.set_results(Reply::Ok(page(vec![row(1, r#"{"success":true}"#)])));
        loader.load().await.unwrap();
        let before = view.get(Region::Results);

        api.set_results(Reply::Ok(page(vec![row(2, "not json")])));
        let result = loader.load().await;

        assert!(matches!(result, Err(SnutzError::Payload(_))));
        assert_eq!(view.get(Region::Results), before);
    }

    #[tokio::test]
    async fn should_leave_region_empty_when_first_fetch_fails() {
        let api = Arc::new(FakeApi::default());
        let view = Arc::new(RecordingView::default());
        api.set_results(Reply::Unreachable);

        let result = loader(&api, &view).load().await;

        assert!(result.is_err());
        assert!(view.get(Region::Results).is_none());
    }
}
