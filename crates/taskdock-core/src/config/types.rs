//! Configuration type definitions for taskdock.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [resolver]
//! extra_install_roots = ["D:\\Apps", "D:\\Games"]
//!
//! [windows]
//! timeout_ms = 5000
//! list_command = ["my-window-lister", "--json"]
//! focus_command = ["my-window-focuser"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.taskdock/config.toml`
/// 2. Project config: `./.taskdock/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskdockConfig {
    /// Application lookup settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Window catalog settings
    #[serde(default)]
    pub windows: WindowsConfig,
}

/// Application lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolverConfig {
    /// Install roots searched after the platform defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_install_roots: Vec<PathBuf>,
}

/// Window catalog configuration.
///
/// Commands are argv arrays. The focus command receives the window handle
/// as its final argument.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WindowsConfig {
    /// Soft ceiling for each external window command, in milliseconds.
    /// Default: 5000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Command printing the window list as JSON.
    /// Default: PowerShell enumeration on Windows, none elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_command: Option<Vec<String>>,

    /// Command bringing a window to the foreground, printing `True` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_command: Option<Vec<String>>,
}
