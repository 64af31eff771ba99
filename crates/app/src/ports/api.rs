//! Backend API port: the JSON-over-HTTP service the dashboard polls.

use std::future::Future;
use std::sync::Arc;

use snutz_domain::command::CommandRequest;
use snutz_domain::device::Device;
use snutz_domain::error::SnutzError;
use snutz_domain::test_result::TestResults;

/// Read and command access to the backend.
///
/// Implementations map transport failures to [`SnutzError::Transport`],
/// non-2xx answers to [`SnutzError::Status`] and unexpected bodies to
/// [`SnutzError::Payload`].
pub trait DashboardApi {
    /// `GET /devices`, in server order.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, SnutzError>> + Send;

    /// `GET /tests/results`.
    fn list_test_results(&self) -> impl Future<Output = Result<TestResults, SnutzError>> + Send;

    /// `POST /commands/create`. Any 2xx counts as accepted.
    fn create_command(
        &self,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<(), SnutzError>> + Send;
}

impl<T: DashboardApi + Send + Sync> DashboardApi for Arc<T> {
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, SnutzError>> + Send {
        (**self).list_devices()
    }

    fn list_test_results(&self) -> impl Future<Output = Result<TestResults, SnutzError>> + Send {
        (**self).list_test_results()
    }

    fn create_command(
        &self,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<(), SnutzError>> + Send {
        (**self).create_command(request)
    }
}
