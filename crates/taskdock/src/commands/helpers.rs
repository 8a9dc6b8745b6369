use tracing::warn;

use taskdock_core::config::TaskdockConfig;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> TaskdockConfig {
    match TaskdockConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.taskdock/config.toml and ./.taskdock/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TaskdockConfig::default()
        }
    }
}

/// Format the error returned when some items of a batch failed.
pub fn format_partial_failure_error(operation: &str, failed: usize, total: usize) -> String {
    format!("{} failed for {}/{} application(s)", operation, failed, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_partial_failure_error() {
        assert_eq!(
            format_partial_failure_error("Resolve", 1, 3),
            "Resolve failed for 1/3 application(s)"
        );
    }
}
