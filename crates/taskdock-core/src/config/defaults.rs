//! Default values for configuration types.
//!
//! Optional fields stay `None` through loading and merging so a later config
//! layer that omits a field does not reset an earlier layer's value. The
//! accessors here apply the defaults.

use crate::config::types::WindowsConfig;

/// Default external command timeout in milliseconds.
///
/// Window enumeration shells out to a script interpreter whose cold start
/// can take a couple of seconds; anything slower is treated as a failure.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

impl WindowsConfig {
    /// Returns the external command timeout, defaulting to 5000ms.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::TaskdockConfig;

    #[test]
    fn test_taskdock_config_default() {
        let config = TaskdockConfig::default();
        assert!(config.resolver.extra_install_roots.is_empty());
        assert_eq!(config.windows.timeout_ms(), 5000);
        assert!(config.windows.list_command.is_none());
        assert!(config.windows.focus_command.is_none());
    }

    #[test]
    fn test_windows_config_serde_defaults() {
        let toml_str = r#"
[windows]
list_command = ["lister"]
"#;
        let config: TaskdockConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.windows.timeout_ms, None);
        assert_eq!(
            config.windows.timeout_ms(),
            5000,
            "timeout_ms should default to 5000, not 0"
        );
    }

    #[test]
    fn test_windows_config_explicit_value_preserved() {
        let toml_str = r#"
[windows]
timeout_ms = 250
"#;
        let config: TaskdockConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.windows.timeout_ms(), 250);
    }
}
