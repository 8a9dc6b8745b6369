//! Application resolution: name or path in, existing executable path out.
//!
//! A [`Resolver`] answers from its [`ResolutionCache`] first, then tries
//! each [`Strategy`] in [`Strategy::CASCADE`] order until one produces a
//! path that exists:
//!
//! 1. the name is already a path
//! 2. executable search path
//! 3. App Paths registry (machine-wide, then per-user)
//! 4. store app alias directory
//! 5. one level below the well-known install roots
//!
//! Hits are cached under the caller's exact string; misses are not.

pub mod cache;
pub mod errors;
pub mod handler;
pub mod probes;
pub mod roots;
pub mod strategies;
pub mod types;
pub mod variations;

pub use cache::ResolutionCache;
pub use errors::ResolverError;
pub use handler::Resolver;
pub use probes::{AppPathRegistry, ExecutableSearch, Filesystem, Probes};
pub use roots::SearchRoots;
pub use types::{CacheStats, Resolution, ResolutionSource, Strategy};
pub use variations::{name_variations, store_variations};
