//! Parsing of the window-list command's JSON output.
//!
//! The list command emits `ConvertTo-Json`-style records. A single window
//! comes back as a bare object rather than a one-element array, so both
//! shapes are accepted. Individual records that do not describe an
//! interactive window are dropped rather than failing the whole list.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::errors::WindowError;
use super::types::{WindowHandle, WindowRecord};

/// One record as printed by the list command.
#[derive(Debug, Deserialize)]
struct RawWindow {
    #[serde(rename = "Title", alias = "title", default)]
    title: Option<String>,
    #[serde(rename = "ProcessName", alias = "processName", default)]
    process_name: Option<String>,
    /// Number or numeric string; decoded by [`process_id`].
    #[serde(rename = "ProcessId", alias = "processId", default)]
    process_id: Option<Value>,
    #[serde(rename = "ExecutablePath", alias = "executablePath", default)]
    executable_path: Option<String>,
    /// Number or string; decoded by [`window_handle`].
    #[serde(rename = "MainWindowHandle", alias = "windowHandle", default)]
    window_handle: Option<Value>,
}

/// Parse the list command's stdout into window records.
///
/// Empty output is an empty list. Records without a title or process name
/// are background artifacts and are dropped quietly. Process ids and handles
/// may be JSON numbers or numeric strings; a titled record whose id or
/// handle is unusable cannot be focused, so it is dropped with a warning.
/// A missing executable path is kept as `None`.
///
/// # Errors
///
/// `WindowError::Parse` if the output is not JSON, or is JSON but neither
/// an object nor an array.
pub fn parse_window_list(stdout: &str) -> Result<Vec<WindowRecord>, WindowError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| WindowError::Parse {
        message: e.to_string(),
    })?;

    let entries = match value {
        Value::Array(entries) => entries,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(WindowError::Parse {
                message: format!("expected an array or object, got {}", json_kind(&other)),
            });
        }
    };

    let total = entries.len();
    let records: Vec<WindowRecord> = entries.into_iter().filter_map(to_record).collect();

    if records.len() < total {
        debug!(
            event = "core.windows.records_dropped",
            dropped = total - records.len(),
            kept = records.len()
        );
    }

    Ok(records)
}

fn to_record(entry: Value) -> Option<WindowRecord> {
    let raw: RawWindow = match serde_json::from_value(entry) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(event = "core.windows.record_malformed", error = %e);
            return None;
        }
    };

    let title = raw.title.filter(|t| !t.is_empty())?;
    let process_name = raw.process_name.filter(|p| !p.is_empty())?;

    let process_id = raw.process_id.as_ref().and_then(process_id);
    let window_handle = raw.window_handle.as_ref().and_then(window_handle);
    let (Some(process_id), Some(window_handle)) = (process_id, window_handle) else {
        warn!(
            event = "core.windows.record_incomplete",
            title = %title,
            process_name = %process_name,
            process_id = ?raw.process_id,
            window_handle = ?raw.window_handle
        );
        return None;
    };

    Some(WindowRecord {
        title,
        process_name: process_name.to_lowercase(),
        process_id,
        executable_path: raw
            .executable_path
            .filter(|p| !p.is_empty())
            .map(PathBuf::from),
        window_handle,
    })
}

fn process_id(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn window_handle(value: &Value) -> Option<WindowHandle> {
    match value {
        Value::Number(n) => n.as_i64().map(WindowHandle::Numeric),
        Value::String(s) => WindowHandle::parse(s).ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_of_records() {
        let stdout = r#"[
            {"Title":"Inbox - Outlook","ProcessName":"OUTLOOK","ProcessId":4120,"ExecutablePath":"C:\\Office\\OUTLOOK.EXE","MainWindowHandle":197098},
            {"Title":"README.md - Code","ProcessName":"Code","ProcessId":8812,"ExecutablePath":null,"MainWindowHandle":330412}
        ]"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Inbox - Outlook");
        assert_eq!(records[0].process_name, "outlook");
        assert_eq!(records[0].process_id, 4120);
        assert_eq!(
            records[0].executable_path,
            Some(PathBuf::from("C:\\Office\\OUTLOOK.EXE"))
        );
        assert_eq!(records[0].window_handle, WindowHandle::Numeric(197098));
        assert_eq!(records[1].process_name, "code");
        assert_eq!(records[1].executable_path, None);
    }

    #[test]
    fn test_single_bare_record() {
        let stdout = r#"{"Title":"Calculator","ProcessName":"CalculatorApp","ProcessId":77,"ExecutablePath":"C:\\calc.exe","MainWindowHandle":5}"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Calculator");
    }

    #[test]
    fn test_missing_title_dropped() {
        let stdout = r#"[
            {"ProcessName":"explorer","ProcessId":1,"MainWindowHandle":10},
            {"Title":"","ProcessName":"explorer","ProcessId":1,"MainWindowHandle":11},
            {"Title":"Docs","ProcessName":"explorer","ProcessId":1,"MainWindowHandle":12}
        ]"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].window_handle, WindowHandle::Numeric(12));
    }

    #[test]
    fn test_missing_process_name_dropped() {
        let stdout = r#"[
            {"Title":"Ghost","ProcessId":1,"MainWindowHandle":10},
            {"Title":"Ghost","ProcessName":null,"ProcessId":1,"MainWindowHandle":11}
        ]"#;

        assert!(parse_window_list(stdout).unwrap().is_empty());
    }

    #[test]
    fn test_absent_executable_path_kept_as_none() {
        let stdout = r#"[
            {"Title":"Terminal","ProcessName":"wt","ProcessId":9,"MainWindowHandle":1},
            {"Title":"Terminal 2","ProcessName":"wt","ProcessId":9,"ExecutablePath":"","MainWindowHandle":2}
        ]"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.executable_path.is_none()));
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let stdout = r#"[
            "not a record",
            {"Title":"Bad pid","ProcessName":"x","ProcessId":"nope","MainWindowHandle":1},
            {"Title":"No handle","ProcessName":"x","ProcessId":3},
            {"Title":"Object handle","ProcessName":"x","ProcessId":3,"MainWindowHandle":{}},
            {"Title":"Good","ProcessName":"x","ProcessId":3,"MainWindowHandle":"0x2a"}
        ]"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].window_handle,
            WindowHandle::Text("0x2a".to_string())
        );
    }

    #[test]
    fn test_numeric_strings_accepted_for_pid_and_handle() {
        let stdout = r#"[
            {"Title":"Inbox","ProcessName":"thunderbird","ProcessId":"4120","MainWindowHandle":"197098"}
        ]"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].process_id, 4120);
        assert_eq!(records[0].window_handle, WindowHandle::Numeric(197098));
    }

    #[test]
    fn test_camel_case_keys_accepted() {
        let stdout = r#"[{"title":"Files","processName":"nautilus","processId":12,"executablePath":"/usr/bin/nautilus","windowHandle":"0x3400003"}]"#;

        let records = parse_window_list(stdout).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].process_name, "nautilus");
    }

    #[test]
    fn test_empty_output_is_empty_list() {
        assert!(parse_window_list("").unwrap().is_empty());
        assert!(parse_window_list("  \r\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            parse_window_list("Get-Process : access denied"),
            Err(WindowError::Parse { .. })
        ));
        assert!(matches!(
            parse_window_list("42"),
            Err(WindowError::Parse { .. })
        ));
    }
}
