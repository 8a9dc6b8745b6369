//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.taskdock/config.toml` (global user preferences)
//! 3. **Project config** - `./.taskdock/config.toml` (directory-specific overrides)

use crate::config::types::{ResolverConfig, TaskdockConfig, WindowsConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<TaskdockConfig, ConfigError> {
    let mut config = TaskdockConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(ConfigError::ConfigNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(ConfigError::ConfigNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.taskdock/config.toml.
fn load_user_config() -> Result<TaskdockConfig, ConfigError> {
    let home_dir = dirs::home_dir().ok_or_else(|| ConfigError::ConfigNotFound {
        path: "~/.taskdock/config.toml".to_string(),
    })?;
    load_config_file(&home_dir.join(".taskdock").join("config.toml"))
}

/// Load the project configuration from ./.taskdock/config.toml.
fn load_project_config() -> Result<TaskdockConfig, ConfigError> {
    let config_path = std::env::current_dir()?
        .join(".taskdock")
        .join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<TaskdockConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields (commands, timeout) replace base values only if present.
/// Extra install roots accumulate, base roots first.
pub fn merge_configs(base: TaskdockConfig, override_config: TaskdockConfig) -> TaskdockConfig {
    TaskdockConfig {
        resolver: ResolverConfig {
            extra_install_roots: {
                let mut roots = base.resolver.extra_install_roots;
                for root in override_config.resolver.extra_install_roots {
                    if !roots.contains(&root) {
                        roots.push(root);
                    }
                }
                roots
            },
        },
        windows: WindowsConfig {
            timeout_ms: override_config.windows.timeout_ms.or(base.windows.timeout_ms),
            list_command: override_config
                .windows
                .list_command
                .or(base.windows.list_command),
            focus_command: override_config
                .windows
                .focus_command
                .or(base.windows.focus_command),
        },
    }
}
