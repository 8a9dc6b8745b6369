use std::path::PathBuf;

/// Machine-wide App Paths key.
pub const MACHINE_APP_PATHS: &str =
    "HKEY_LOCAL_MACHINE\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\App Paths";

/// Per-user App Paths key.
pub const USER_APP_PATHS: &str =
    "HKEY_CURRENT_USER\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\App Paths";

/// Where the registry, store and install-dir lookups look.
///
/// Locations are probed in vector order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRoots {
    /// App Paths registry keys, machine-wide first.
    pub registry_locations: Vec<String>,
    /// Per-user directory of store app execution aliases.
    pub store_dir: Option<PathBuf>,
    /// Directories whose immediate subdirectories hold installed apps.
    pub install_roots: Vec<PathBuf>,
}

impl SearchRoots {
    /// The host's well-known locations.
    ///
    /// Windows: both App Paths keys, `%LOCALAPPDATA%\Microsoft\WindowsApps`,
    /// Program Files (both bitnesses) and the per-user Programs folders.
    /// Other hosts have no registry or store; `/opt`, `/usr/local` and the
    /// user data dir stand in as install roots.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::windows_default()
        } else {
            Self::unix_default()
        }
    }

    fn windows_default() -> Self {
        let local_app_data = dirs::data_local_dir();
        let roaming_app_data = dirs::data_dir();

        let install_roots = [
            std::env::var_os("ProgramFiles").map(PathBuf::from),
            std::env::var_os("ProgramFiles(x86)").map(PathBuf::from),
            local_app_data.as_ref().map(|dir| dir.join("Programs")),
            roaming_app_data.map(|dir| dir.join("Local").join("Programs")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            registry_locations: vec![MACHINE_APP_PATHS.to_string(), USER_APP_PATHS.to_string()],
            store_dir: local_app_data.map(|dir| dir.join("Microsoft").join("WindowsApps")),
            install_roots,
        }
    }

    fn unix_default() -> Self {
        let mut install_roots = vec![PathBuf::from("/opt"), PathBuf::from("/usr/local")];
        if let Some(data_dir) = dirs::data_local_dir() {
            install_roots.push(data_dir);
        }

        Self {
            registry_locations: Vec::new(),
            store_dir: None,
            install_roots,
        }
    }

    /// Append install roots after the existing ones, skipping duplicates.
    pub fn with_extra_install_roots<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for root in roots {
            if !self.install_roots.contains(&root) {
                self.install_roots.push(root);
            }
        }
        self
    }
}
