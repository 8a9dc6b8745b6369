use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::WindowError;

/// Opaque OS token identifying a top-level window.
///
/// Only compared for equality and handed back to the activate command.
/// Keeps the JSON shape it arrived in (number or string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowHandle {
    Numeric(i64),
    Text(String),
}

impl WindowHandle {
    /// Parse a handle supplied by a caller (CLI argument, request body).
    ///
    /// # Errors
    ///
    /// `WindowError::MissingHandle` for empty input.
    pub fn parse(raw: &str) -> Result<Self, WindowError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(WindowError::MissingHandle);
        }

        Ok(raw
            .parse::<i64>()
            .map(WindowHandle::Numeric)
            .unwrap_or_else(|_| WindowHandle::Text(raw.to_string())))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, WindowHandle::Numeric(_))
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowHandle::Numeric(value) => write!(f, "{}", value),
            WindowHandle::Text(value) => f.write_str(value),
        }
    }
}

/// One live top-level window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub title: String,
    /// Lower-cased owning process name.
    pub process_name: String,
    pub process_id: u32,
    pub executable_path: Option<PathBuf>,
    pub window_handle: WindowHandle,
}

/// Per-window detail kept inside a [`ProcessGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedWindow {
    pub title: String,
    pub process_id: u32,
    pub window_handle: WindowHandle,
}

/// All windows of one process name, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessGroup {
    pub process_name: String,
    pub executable_path: Option<PathBuf>,
    pub window_count: usize,
    pub windows: Vec<GroupedWindow>,
}

/// A running application without per-window detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningApplication {
    pub name: String,
    pub path: Option<PathBuf>,
    pub window_count: usize,
}

/// Result of a best-effort enumeration.
///
/// `Degraded` means the query itself failed, as opposed to a live snapshot
/// that happens to be empty. The public listing operations collapse both
/// into an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Live(Vec<T>),
    Degraded { reason: String },
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Live(items) => items,
            Listing::Degraded { .. } => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Listing::Degraded { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> Listing<U> {
        match self {
            Listing::Live(items) => Listing::Live(f(items)),
            Listing::Degraded { reason } => Listing::Degraded { reason },
        }
    }
}
