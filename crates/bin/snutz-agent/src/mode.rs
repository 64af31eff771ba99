//! What the agent was asked to do, read from its command-line arguments.
//!
//! ```text
//! snutz-agent                       register, then heartbeat until Ctrl-C
//! snutz-agent ping <target> [count] ping once and print the result_data JSON
//! ```

use snutz_domain::command::PING_COUNT;

/// One invocation of the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Heartbeat,
    Ping { target: String, count: u32 },
}

/// Command-line errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing ping target")]
    MissingTarget,
    #[error("invalid ping count `{0}`")]
    InvalidCount(String),
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
}

impl Mode {
    /// Parse the arguments that follow the program name.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] naming the first argument that does not fit.
    pub fn from_args<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mode = match args.next().as_deref() {
            None => Self::Heartbeat,
            Some("ping") => {
                let target = args.next().ok_or(UsageError::MissingTarget)?;
                let count = match args.next() {
                    None => PING_COUNT,
                    Some(raw) => match raw.parse() {
                        Ok(count) if count > 0 => count,
                        _ => return Err(UsageError::InvalidCount(raw)),
                    },
                };
                Self::Ping { target, count }
            }
            Some(other) => return Err(UsageError::Unexpected(other.to_string())),
        };
        match args.next() {
            Some(extra) => Err(UsageError::Unexpected(extra)),
            None => Ok(mode),
        }
    }
}
