//! Commands: diagnostic requests sent to a device from the dashboard form.

use serde::{Deserialize, Serialize};

use crate::error::{SnutzError, ValidationError};

/// Command type preselected in the dashboard form.
pub const DEFAULT_COMMAND_TYPE: &str = "ping";

/// Number of echo requests per ping command. Not user-supplied.
pub const PING_COUNT: u32 = 4;

/// Raw values of the command form, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandForm {
    #[serde(default)]
    pub device_id: String,
    #[serde(default = "default_command_type")]
    pub test_type: String,
    #[serde(default)]
    pub target: String,
}

fn default_command_type() -> String {
    DEFAULT_COMMAND_TYPE.to_string()
}

impl Default for CommandForm {
    fn default() -> Self {
        Self {
            device_id: String::new(),
            test_type: default_command_type(),
            target: String::new(),
        }
    }
}

/// `parameters` of a command, sent as URL-encoded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameters {
    pub target: String,
    pub count: u32,
}

/// A validated command ready to be submitted. Not retained after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub device_id: String,
    pub command_type: String,
    pub parameters: CommandParameters,
}

impl CommandRequest {
    /// Validate the form and build a request.
    ///
    /// Checks run in order and stop at the first failure: a device must be
    /// selected, then a target must be given. The command type is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`SnutzError::Validation`] with
    /// [`ValidationError::NoDeviceSelected`] or [`ValidationError::NoTarget`].
    pub fn from_form(form: CommandForm) -> Result<Self, SnutzError> {
        if form.device_id.is_empty() {
            return Err(ValidationError::NoDeviceSelected.into());
        }
        if form.target.is_empty() {
            return Err(ValidationError::NoTarget.into());
        }
        Ok(Self {
            device_id: form.device_id,
            command_type: form.test_type,
            parameters: CommandParameters {
                target: form.target,
                count: PING_COUNT,
            },
        })
    }

    /// `parameters` serialized as compact JSON, e.g. `{"target":"8.8.8.8","count":4}`.
    ///
    /// # Errors
    ///
    /// Returns [`SnutzError::Payload`] if serialization fails.
    pub fn parameters_json(&self) -> Result<String, SnutzError> {
        Ok(serde_json::to_string(&self.parameters)?)
    }
}

impl TryFrom<CommandForm> for CommandRequest {
    type Error = SnutzError;

    fn try_from(form: CommandForm) -> Result<Self, Self::Error> {
        Self::from_form(form)
    }
}
