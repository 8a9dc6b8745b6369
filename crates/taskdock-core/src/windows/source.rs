//! External collaborators that talk to the desktop's window manager.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::WindowsConfig;
use crate::process::run_argv_with_timeout;

use super::errors::WindowError;
use super::types::WindowHandle;

/// Raw access to the OS window list and foreground activation.
///
/// Implementations return whatever the underlying query printed; parsing and
/// interpretation happen in the catalog.
pub trait WindowSource: Send + Sync {
    /// JSON text describing every top-level window with a title.
    fn list(&self) -> Result<String, WindowError>;

    /// Bring `handle` to the foreground. Prints `True` on success.
    fn activate(&self, handle: &WindowHandle) -> Result<String, WindowError>;
}

#[cfg(windows)]
const POWERSHELL_PREFIX: [&str; 6] = [
    "powershell",
    "-NoProfile",
    "-NonInteractive",
    "-ExecutionPolicy",
    "Bypass",
    "-Command",
];

#[cfg(windows)]
const LIST_SCRIPT: &str = "Get-Process | Where-Object { $_.MainWindowHandle -ne 0 -and $_.MainWindowTitle } | \
ForEach-Object { [PSCustomObject]@{ Title = $_.MainWindowTitle; ProcessName = $_.ProcessName; \
ProcessId = $_.Id; ExecutablePath = $_.Path; MainWindowHandle = [long]$_.MainWindowHandle } } | \
ConvertTo-Json -Compress";

#[cfg(windows)]
const FOCUS_SCRIPT: &str = "& { param([long]$Handle) \
Add-Type -Namespace Taskdock -Name Win32 -MemberDefinition '\
[DllImport(\"user32.dll\")] public static extern bool SetForegroundWindow(IntPtr hWnd); \
[DllImport(\"user32.dll\")] public static extern bool ShowWindowAsync(IntPtr hWnd, int nCmdShow); \
[DllImport(\"user32.dll\")] public static extern bool IsIconic(IntPtr hWnd);'; \
$h = [IntPtr]$Handle; \
if ([Taskdock.Win32]::IsIconic($h)) { [void][Taskdock.Win32]::ShowWindowAsync($h, 9) }; \
[Taskdock.Win32]::SetForegroundWindow($h) }";

#[cfg(windows)]
fn powershell(script: &str) -> Vec<String> {
    POWERSHELL_PREFIX
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(script.to_string()))
        .collect()
}

/// Runs argv-style commands with a deadline.
///
/// The focus command receives the handle as its final argument.
#[derive(Debug, Clone)]
pub struct CommandWindowSource {
    list_command: Option<Vec<String>>,
    focus_command: Option<Vec<String>>,
    timeout: Duration,
    /// The built-in focus script is a PowerShell `-Command` line, so only
    /// numeric handles may be appended to it.
    numeric_handles_only: bool,
}

impl CommandWindowSource {
    pub fn new(
        list_command: Option<Vec<String>>,
        focus_command: Option<Vec<String>>,
        timeout: Duration,
    ) -> Self {
        Self {
            list_command,
            focus_command,
            timeout,
            numeric_handles_only: false,
        }
    }

    /// Configured commands, falling back to the platform's built-in ones.
    pub fn from_config(config: &WindowsConfig) -> Self {
        let timeout = Duration::from_millis(config.timeout_ms());
        let (focus_command, numeric_handles_only) = match &config.focus_command {
            Some(command) => (Some(command.clone()), false),
            None => {
                let builtin = default_focus_command();
                let numeric = builtin.is_some();
                (builtin, numeric)
            }
        };

        Self {
            list_command: config.list_command.clone().or_else(default_list_command),
            focus_command,
            timeout,
            numeric_handles_only,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn run(&self, argv: &[String], extra_args: &[String]) -> Result<String, WindowError> {
        let output = run_argv_with_timeout(argv, extra_args, self.timeout)?;

        if !output.success {
            warn!(
                event = "core.windows.command_failed",
                program = argv.first().map(String::as_str).unwrap_or_default(),
                code = ?output.code,
                stderr = %output.stderr.trim()
            );
            return Err(WindowError::CommandFailed {
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl WindowSource for CommandWindowSource {
    fn list(&self) -> Result<String, WindowError> {
        let command = self
            .list_command
            .as_deref()
            .ok_or(WindowError::Unsupported { operation: "list" })?;

        debug!(event = "core.windows.list_command_started");
        self.run(command, &[])
    }

    fn activate(&self, handle: &WindowHandle) -> Result<String, WindowError> {
        let command = self
            .focus_command
            .as_deref()
            .ok_or(WindowError::Unsupported { operation: "focus" })?;

        if self.numeric_handles_only && !handle.is_numeric() {
            return Err(WindowError::InvalidHandle {
                handle: handle.to_string(),
            });
        }

        debug!(event = "core.windows.focus_command_started", handle = %handle);
        self.run(command, &[handle.to_string()])
    }
}

#[cfg(windows)]
fn default_list_command() -> Option<Vec<String>> {
    Some(powershell(LIST_SCRIPT))
}

#[cfg(not(windows))]
fn default_list_command() -> Option<Vec<String>> {
    None
}

#[cfg(windows)]
fn default_focus_command() -> Option<Vec<String>> {
    Some(powershell(FOCUS_SCRIPT))
}

#[cfg(not(windows))]
fn default_focus_command() -> Option<Vec<String>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Option<Vec<String>> {
        Some(parts.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_unconfigured_source_is_unsupported() {
        let source = CommandWindowSource::new(None, None, Duration::from_secs(1));

        assert!(matches!(
            source.list(),
            Err(WindowError::Unsupported { operation: "list" })
        ));
        assert!(matches!(
            source.activate(&WindowHandle::Numeric(1)),
            Err(WindowError::Unsupported { operation: "focus" })
        ));
    }

    #[test]
    fn test_configured_commands_override_defaults() {
        let config = WindowsConfig {
            timeout_ms: Some(750),
            list_command: argv(&["lister"]),
            focus_command: argv(&["focuser", "--raise"]),
        };
        let source = CommandWindowSource::from_config(&config);

        assert_eq!(source.timeout(), Duration::from_millis(750));
        assert_eq!(source.list_command, argv(&["lister"]));
        assert_eq!(source.focus_command, argv(&["focuser", "--raise"]));
        assert!(!source.numeric_handles_only);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_no_builtin_commands_off_windows() {
        let source = CommandWindowSource::from_config(&WindowsConfig::default());
        assert!(source.list_command.is_none());
        assert!(source.focus_command.is_none());
    }

    #[cfg(windows)]
    #[test]
    fn test_builtin_focus_rejects_text_handles() {
        let source = CommandWindowSource::from_config(&WindowsConfig::default());
        assert!(source.numeric_handles_only);
        assert!(matches!(
            source.activate(&WindowHandle::Text("1; Stop-Computer".to_string())),
            Err(WindowError::InvalidHandle { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_returns_stdout() {
        let source = CommandWindowSource::new(
            argv(&["sh", "-c", "printf '[]'"]),
            None,
            Duration::from_secs(5),
        );
        assert_eq!(source.list().unwrap(), "[]");
    }

    #[cfg(unix)]
    #[test]
    fn test_activate_appends_handle() {
        let source = CommandWindowSource::new(
            None,
            argv(&["sh", "-c", "printf '%s' \"$0\""]),
            Duration::from_secs(5),
        );
        let output = source
            .activate(&WindowHandle::Text("0x3400003".to_string()))
            .unwrap();
        assert_eq!(output, "0x3400003");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_command_failed() {
        let source = CommandWindowSource::new(
            argv(&["sh", "-c", "echo denied >&2; exit 3"]),
            None,
            Duration::from_secs(5),
        );
        match source.list() {
            Err(WindowError::CommandFailed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "denied");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_slow_command_times_out() {
        let source = CommandWindowSource::new(
            argv(&["sleep", "5"]),
            None,
            Duration::from_millis(100),
        );
        assert!(matches!(
            source.list(),
            Err(WindowError::Invocation { .. })
        ));
    }
}
