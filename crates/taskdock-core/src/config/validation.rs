use crate::config::types::TaskdockConfig;
use crate::errors::ConfigError;

/// Validate a fully merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when the window timeout is
/// zero or a configured command has no program.
pub fn validate_config(config: &TaskdockConfig) -> Result<(), ConfigError> {
    if config.windows.timeout_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "windows.timeout_ms must be greater than 0".to_string(),
        });
    }

    for (key, command) in [
        ("windows.list_command", &config.windows.list_command),
        ("windows.focus_command", &config.windows.focus_command),
    ] {
        if let Some(argv) = command
            && argv.first().is_none_or(|program| program.trim().is_empty())
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must name a program", key),
            });
        }
    }

    Ok(())
}
