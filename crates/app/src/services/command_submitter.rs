//! Command submitter: validate the form and create a command on a device.

use snutz_domain::command::{CommandForm, CommandRequest};
use snutz_domain::error::SnutzError;

use crate::ports::{DashboardApi, Notifier};

/// Alert shown when the backend accepted a command.
pub const ACCEPTED_ALERT: &str =
    "Command sent! Results will appear in 10-20 seconds. Refresh to see them.";

/// Alert shown when the command request never got an answer.
pub const UNREACHABLE_ALERT: &str = "Error: Could not send command. Is the server running?";

/// Turns a submitted form into a `POST /commands/create`.
///
/// Neither the device selector nor the results table are touched; they
/// change on the next scheduled poll.
pub struct CommandSubmitter<A, N> {
    api: A,
    notifier: N,
}

impl<A, N> CommandSubmitter<A, N>
where
    A: DashboardApi,
    N: Notifier,
{
    /// Create a new submitter from its ports.
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Validate `form` and submit it. Every outcome is reported through the
    /// notifier.
    ///
    /// Validation failures never reach the network.
    ///
    /// # Errors
    ///
    /// Returns [`SnutzError::Validation`] for an incomplete form, or the
    /// status, transport or payload error of the request.
    #[tracing::instrument(skip(self, form), fields(device_id = %form.device_id, command_type = %form.test_type))]
    pub async fn submit(&self, form: CommandForm) -> Result<(), SnutzError> {
        let outcome = self.send(form).await;
        match &outcome {
            Ok(()) => {
                tracing::info!("command accepted");
                self.notifier.alert(ACCEPTED_ALERT);
            }
            Err(SnutzError::Validation(err)) => {
                tracing::debug!(%err, "command form rejected");
                self.notifier.alert(&err.to_string());
            }
            Err(SnutzError::Status(status)) => {
                tracing::warn!(status, "command rejected by server");
                self.notifier
                    .alert(&format!("Error: Server returned status {status}"));
            }
            Err(err) => {
                tracing::error!(%err, "failed to send command");
                self.notifier.alert(UNREACHABLE_ALERT);
            }
        }
        outcome
    }

    async fn send(&self, form: CommandForm) -> Result<(), SnutzError> {
        let request = CommandRequest::from_form(form)?;
        self.api.create_command(&request).await
    }
}
