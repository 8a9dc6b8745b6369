//! Desktop window catalog: enumerate, group by process, focus.
//!
//! All OS access goes through a [`WindowSource`]; the default
//! [`CommandWindowSource`] shells out to a list command and a focus command
//! bounded by `[windows] timeout_ms`.

pub mod errors;
pub mod grouping;
pub mod handler;
pub mod parse;
pub mod source;
pub mod types;

pub use errors::WindowError;
pub use grouping::{group_by_process, running_applications};
pub use handler::WindowCatalog;
pub use parse::parse_window_list;
pub use source::{CommandWindowSource, WindowSource};
pub use types::{
    GroupedWindow, Listing, ProcessGroup, RunningApplication, WindowHandle, WindowRecord,
};
