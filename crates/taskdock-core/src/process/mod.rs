pub mod errors;
pub mod operations;
pub mod types;

pub use errors::ProcessError;
pub use operations::{run_argv_with_timeout, run_with_timeout};
pub use types::CommandOutput;
