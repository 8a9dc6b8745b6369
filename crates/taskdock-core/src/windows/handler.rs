use tracing::{info, warn};

use crate::config::WindowsConfig;

use super::errors::WindowError;
use super::grouping::{group_by_process, running_applications};
use super::parse::parse_window_list;
use super::source::{CommandWindowSource, WindowSource};
use super::types::{Listing, ProcessGroup, RunningApplication, WindowHandle, WindowRecord};

/// Live view of the desktop's top-level windows.
///
/// Every listing is a fresh query; nothing is cached between calls. Query
/// failures never escape: listings degrade to empty and focus reports
/// `false`.
pub struct WindowCatalog {
    source: Box<dyn WindowSource>,
}

impl WindowCatalog {
    pub fn new(source: Box<dyn WindowSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &WindowsConfig) -> Self {
        Self::new(Box::new(CommandWindowSource::from_config(config)))
    }

    /// One query against the window source.
    pub fn snapshot(&self) -> Listing<WindowRecord> {
        info!(event = "core.windows.list_started");

        match self.source.list().and_then(|stdout| parse_window_list(&stdout)) {
            Ok(records) => {
                info!(event = "core.windows.list_completed", count = records.len());
                Listing::Live(records)
            }
            Err(e) => {
                warn!(
                    event = "core.windows.list_failed",
                    error = %e,
                    message = "Window enumeration failed - reporting no windows"
                );
                Listing::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// All windows with a title, in the order the OS reported them.
    pub fn list_windows(&self) -> Vec<WindowRecord> {
        self.snapshot().into_items()
    }

    pub fn grouped_snapshot(&self) -> Listing<ProcessGroup> {
        self.snapshot().map(|records| group_by_process(&records))
    }

    /// Windows grouped by lower-cased process name, in first-seen order.
    pub fn list_grouped_windows(&self) -> Vec<ProcessGroup> {
        self.grouped_snapshot().into_items()
    }

    pub fn list_running_application_names(&self) -> Vec<RunningApplication> {
        running_applications(self.list_grouped_windows())
    }

    /// Bring a window to the foreground.
    ///
    /// Returns true only when the activate command printed exactly `True`.
    pub fn focus_window(&self, handle: &WindowHandle) -> bool {
        info!(event = "core.windows.focus_started", handle = %handle);

        match self.source.activate(handle) {
            Ok(output) => {
                let focused = output.trim() == "True";
                if focused {
                    info!(event = "core.windows.focus_completed", handle = %handle);
                } else {
                    warn!(
                        event = "core.windows.focus_rejected",
                        handle = %handle,
                        output = %output.trim()
                    );
                }
                focused
            }
            Err(e) => {
                warn!(
                    event = "core.windows.focus_failed",
                    handle = %handle,
                    error = %e
                );
                false
            }
        }
    }
}
