use crate::errors::TaskdockError;
use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error(
        "No window {operation} command is available on this platform. \
         Set windows.{operation}_command in ~/.taskdock/config.toml"
    )]
    Unsupported { operation: &'static str },

    #[error("Window command failed to run: {source}")]
    Invocation {
        #[from]
        source: ProcessError,
    },

    #[error("Window command exited with {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("Unreadable window list: {message}")]
    Parse { message: String },

    #[error("Window handle is missing")]
    MissingHandle,

    #[error("Window handle '{handle}' is not valid for this platform")]
    InvalidHandle { handle: String },
}

impl TaskdockError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::Unsupported { .. } => "WINDOW_UNSUPPORTED",
            WindowError::Invocation { .. } => "WINDOW_INVOCATION_FAILED",
            WindowError::CommandFailed { .. } => "WINDOW_COMMAND_FAILED",
            WindowError::Parse { .. } => "WINDOW_PARSE_FAILED",
            WindowError::MissingHandle => "WINDOW_MISSING_HANDLE",
            WindowError::InvalidHandle { .. } => "WINDOW_INVALID_HANDLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::MissingHandle | WindowError::InvalidHandle { .. }
        )
    }
}
