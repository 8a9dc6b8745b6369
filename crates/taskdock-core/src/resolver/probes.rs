//! OS-facing collaborators used by the lookup strategies.
//!
//! Each probe answers a single question about the host and never fails:
//! errors are logged at debug level and reported as "nothing found", so a
//! broken probe only makes its strategy yield to the next one.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

/// Platform "find in PATH" equivalent.
pub trait ExecutableSearch: Send + Sync {
    /// First match for `name` on the executable search path.
    fn find(&self, name: &str) -> Option<PathBuf>;
}

/// Platform installed-application path store (Windows "App Paths").
pub trait AppPathRegistry: Send + Sync {
    /// The recorded executable for `key` under `location`, if any.
    fn query(&self, location: &str, key: &str) -> Option<PathBuf>;
}

/// Filesystem questions asked by the lookups.
pub trait Filesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Immediate child directories of `path`.
    ///
    /// Unreadable or missing directories yield an empty list.
    fn subdirectories(&self, path: &Path) -> Vec<PathBuf>;
}

/// The collaborator set a [`Resolver`](super::Resolver) runs against.
pub struct Probes {
    pub search: Box<dyn ExecutableSearch>,
    pub registry: Box<dyn AppPathRegistry>,
    pub fs: Box<dyn Filesystem>,
}

impl Probes {
    /// Probes backed by the real host.
    pub fn system() -> Self {
        Self {
            search: Box::new(WhichSearch),
            registry: Box::new(RegQueryRegistry::default()),
            fs: Box::new(RealFilesystem),
        }
    }
}

impl Default for Probes {
    fn default() -> Self {
        Self::system()
    }
}

/// [`ExecutableSearch`] backed by the `which` crate.
pub struct WhichSearch;

impl ExecutableSearch for WhichSearch {
    fn find(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => Some(path),
            Err(which::Error::CannotFindBinaryPath) => None,
            Err(e) => {
                debug!(
                    event = "core.resolver.path_search_failed",
                    name = name,
                    error = %e
                );
                None
            }
        }
    }
}

/// [`Filesystem`] backed by `std::fs`.
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn subdirectories(&self, path: &Path) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(
                    event = "core.resolver.read_dir_failed",
                    path = %path.display(),
                    error = %e
                );
                return Vec::new();
            }
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .map(|entry| entry.path())
            .collect()
    }
}

/// Ceiling for a single `reg query` invocation.
const REG_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

static REG_SZ_VALUE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"REG_SZ\s+(.+)").ok());

/// [`AppPathRegistry`] that shells out to `reg query "<location>\<key>" /ve`.
///
/// Only Windows has an App Paths store; elsewhere every query answers `None`
/// without spawning anything.
pub struct RegQueryRegistry {
    timeout: Duration,
}

impl Default for RegQueryRegistry {
    fn default() -> Self {
        Self {
            timeout: REG_QUERY_TIMEOUT,
        }
    }
}

impl AppPathRegistry for RegQueryRegistry {
    fn query(&self, location: &str, key: &str) -> Option<PathBuf> {
        if !cfg!(windows) {
            return None;
        }

        let args = vec![format!("{}\\{}", location, key), "/ve".to_string()];

        match crate::process::run_with_timeout("reg", &args, self.timeout) {
            Ok(output) if output.success => parse_reg_default_value(&output.stdout),
            Ok(_) => None,
            Err(e) => {
                debug!(
                    event = "core.resolver.registry_query_failed",
                    location = location,
                    key = key,
                    error = %e
                );
                None
            }
        }
    }
}

/// Extract the `(Default)` string value from `reg query ... /ve` output.
///
/// Surrounding double quotes, which some installers write, are removed.
pub fn parse_reg_default_value(stdout: &str) -> Option<PathBuf> {
    let regex = REG_SZ_VALUE.as_ref()?;
    let captures = regex.captures(stdout)?;
    let value = captures.get(1)?.as_str().trim().trim_matches('"');

    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reg_default_value() {
        let stdout = "\r\nHKEY_LOCAL_MACHINE\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\App Paths\\chrome.exe\r\n    (Default)    REG_SZ    C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe\r\n\r\n";
        assert_eq!(
            parse_reg_default_value(stdout),
            Some(PathBuf::from(
                "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe"
            ))
        );
    }

    #[test]
    fn test_parse_reg_default_value_strips_quotes() {
        let stdout = "    (Default)    REG_SZ    \"C:\\Apps\\tool.exe\"\r\n";
        assert_eq!(
            parse_reg_default_value(stdout),
            Some(PathBuf::from("C:\\Apps\\tool.exe"))
        );
    }

    #[test]
    fn test_parse_reg_default_value_without_value() {
        assert_eq!(parse_reg_default_value(""), None);
        assert_eq!(
            parse_reg_default_value("    (Default)    REG_DWORD    0x1\r\n"),
            None
        );
    }

    #[test]
    fn test_real_filesystem_subdirectories() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("AppOne")).unwrap();
        std::fs::create_dir(temp_dir.path().join("AppTwo")).unwrap();
        std::fs::write(temp_dir.path().join("readme.txt"), "not a dir").unwrap();

        let mut dirs = RealFilesystem.subdirectories(temp_dir.path());
        dirs.sort();
        assert_eq!(
            dirs,
            vec![
                temp_dir.path().join("AppOne"),
                temp_dir.path().join("AppTwo")
            ]
        );
    }

    #[test]
    fn test_real_filesystem_subdirectories_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(
            RealFilesystem
                .subdirectories(&temp_dir.path().join("absent"))
                .is_empty()
        );
    }

    #[test]
    fn test_which_search_unknown_binary() {
        assert!(WhichSearch.find("nonexistent-app-xyz").is_none());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_registry_is_empty_off_windows() {
        let registry = RegQueryRegistry::default();
        assert!(registry.query("HKEY_CURRENT_USER\\Software", "sh").is_none());
    }
}
