use tracing::{debug, info, warn};

use super::cache::ResolutionCache;
use super::errors::ResolverError;
use super::probes::Probes;
use super::roots::SearchRoots;
use super::strategies::LookupContext;
use super::types::{CacheStats, Resolution, ResolutionSource, Strategy};
use crate::config::TaskdockConfig;

/// Resolves application names to executable paths.
///
/// Owns its cache; two resolvers never share entries. Safe to share across
/// threads: the cache lock is held for a whole resolution, so concurrent
/// calls for the same key run the cascade once.
///
/// That lock is also the only lock. While one resolution runs its cascade
/// (on Windows possibly many registry queries), lookups for other names,
/// [`Resolver::cache_stats`] and [`Resolver::clear_cache`] all wait for it.
pub struct Resolver {
    roots: SearchRoots,
    probes: Probes,
    cache: ResolutionCache,
}

impl Resolver {
    pub fn new(roots: SearchRoots, probes: Probes, cache: ResolutionCache) -> Self {
        Self {
            roots,
            probes,
            cache,
        }
    }

    /// A resolver over the host's default locations plus any configured
    /// extra install roots.
    pub fn from_config(config: &TaskdockConfig) -> Self {
        let roots = SearchRoots::platform_default()
            .with_extra_install_roots(config.resolver.extra_install_roots.iter().cloned());
        Self::new(roots, Probes::system(), ResolutionCache::new())
    }

    /// Resolve `name` to an existing executable.
    ///
    /// Returns `Ok(None)` when every strategy fails. Misses are not cached,
    /// so the next call for the same name runs the full cascade again.
    /// Cache hits are returned without checking the path still exists.
    ///
    /// # Errors
    ///
    /// `ResolverError::EmptyName` if `name` is empty or whitespace.
    pub fn resolve(&self, name: &str) -> Result<Option<Resolution>, ResolverError> {
        if name.trim().is_empty() {
            return Err(ResolverError::EmptyName);
        }

        let mut entries = self.cache.lock();

        if let Some(path) = entries.get(name) {
            debug!(
                event = "core.resolver.cache_hit",
                name = name,
                path = %path.display()
            );
            return Ok(Some(Resolution {
                path: path.clone(),
                source: ResolutionSource::Cache,
            }));
        }

        info!(event = "core.resolver.resolve_started", name = name);

        let ctx = LookupContext {
            roots: &self.roots,
            probes: &self.probes,
        };

        for strategy in Strategy::CASCADE {
            let Some(path) = strategy.lookup(&ctx, name) else {
                debug!(
                    event = "core.resolver.strategy_missed",
                    name = name,
                    strategy = %strategy
                );
                continue;
            };

            entries.insert(name.to_string(), path.clone());

            info!(
                event = "core.resolver.resolve_completed",
                name = name,
                strategy = %strategy,
                path = %path.display()
            );

            return Ok(Some(Resolution {
                path,
                source: ResolutionSource::Lookup(strategy),
            }));
        }

        warn!(event = "core.resolver.resolve_not_found", name = name);
        Ok(None)
    }

    /// Drop every cached resolution.
    pub fn clear_cache(&self) {
        let size = self.cache.len();
        self.cache.clear();
        info!(event = "core.resolver.cache_cleared", size = size);
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn roots(&self) -> &SearchRoots {
        &self.roots
    }
}
