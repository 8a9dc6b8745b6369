use crate::errors::TaskdockError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to spawn '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("'{program}' did not finish within {timeout_ms}ms")]
    TimedOut { program: String, timeout_ms: u64 },

    #[error("Failed to wait for '{program}': {message}")]
    WaitFailed { program: String, message: String },

    #[error("Empty command line")]
    EmptyCommand,
}

impl TaskdockError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
            ProcessError::TimedOut { .. } => "PROCESS_TIMED_OUT",
            ProcessError::WaitFailed { .. } => "PROCESS_WAIT_FAILED",
            ProcessError::EmptyCommand => "PROCESS_EMPTY_COMMAND",
        }
    }
}
