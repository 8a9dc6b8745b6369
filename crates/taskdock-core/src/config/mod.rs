//! # Configuration System
//!
//! Hierarchical TOML configuration system for taskdock.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.taskdock/config.toml` (global user preferences)
//! 3. **Project config** - `./.taskdock/config.toml` (directory-specific overrides)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use taskdock_core::config::TaskdockConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TaskdockConfig::load_hierarchy()?;
//!     println!("window timeout: {}ms", config.windows.timeout_ms());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ResolverConfig, TaskdockConfig, WindowsConfig};
pub use validation::validate_config;

impl TaskdockConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
