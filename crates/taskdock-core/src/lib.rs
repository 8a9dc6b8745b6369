//! taskdock-core: Core library for application lookup and desktop window management
//!
//! This library provides the two engines behind the taskdock launcher:
//! locating an installed application's executable by name, and cataloguing
//! the open top-level windows on the desktop. It is used by the CLI and by
//! any HTTP/UI layer that composes the two.
//!
//! # Main Entry Points
//!
//! - [`resolver`] - Resolve application names to executable paths (cached)
//! - [`windows`] - List, group and focus top-level windows
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod process;
pub mod resolver;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::TaskdockConfig;
pub use resolver::{CacheStats, Resolution, ResolutionCache, Resolver, ResolverError, Strategy};
pub use windows::{
    Listing, ProcessGroup, RunningApplication, WindowCatalog, WindowError, WindowHandle,
    WindowRecord,
};

// Re-export logging initialization
pub use logging::init_logging;
