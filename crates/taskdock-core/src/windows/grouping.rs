use std::collections::HashMap;

use super::types::{GroupedWindow, ProcessGroup, RunningApplication, WindowRecord};

/// Group windows by lower-cased process name.
///
/// Groups keep first-seen order and windows keep their order within a
/// group. A group's executable path is the first non-null path seen for it.
pub fn group_by_process(records: &[WindowRecord]) -> Vec<ProcessGroup> {
    let mut groups: Vec<ProcessGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index
            .entry(record.process_name.as_str())
            .or_insert_with(|| {
                groups.push(ProcessGroup {
                    process_name: record.process_name.clone(),
                    executable_path: None,
                    window_count: 0,
                    windows: Vec::new(),
                });
                groups.len() - 1
            });

        let group = &mut groups[slot];
        if group.executable_path.is_none() {
            group.executable_path = record.executable_path.clone();
        }
        group.windows.push(GroupedWindow {
            title: record.title.clone(),
            process_id: record.process_id,
            window_handle: record.window_handle.clone(),
        });
        group.window_count = group.windows.len();
    }

    groups
}

pub fn running_applications(groups: Vec<ProcessGroup>) -> Vec<RunningApplication> {
    groups
        .into_iter()
        .map(|group| RunningApplication {
            name: group.process_name,
            path: group.executable_path,
            window_count: group.window_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::windows::types::WindowHandle;

    fn record(title: &str, process: &str, pid: u32, path: Option<&str>, hwnd: i64) -> WindowRecord {
        WindowRecord {
            title: title.to_string(),
            process_name: process.to_string(),
            process_id: pid,
            executable_path: path.map(PathBuf::from),
            window_handle: WindowHandle::Numeric(hwnd),
        }
    }

    fn browser_and_editor() -> Vec<WindowRecord> {
        vec![
            record("Mail", "chrome", 100, Some("C:\\chrome.exe"), 1),
            record("README.md", "code", 200, None, 2),
            record("News", "chrome", 101, Some("C:\\chrome.exe"), 3),
            record("main.rs", "code", 200, Some("C:\\Code\\Code.exe"), 4),
            record("Docs", "chrome", 102, None, 5),
        ]
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let groups = group_by_process(&browser_and_editor());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].process_name, "chrome");
        assert_eq!(groups[0].window_count, 3);
        assert_eq!(groups[1].process_name, "code");
        assert_eq!(groups[1].window_count, 2);

        let titles: Vec<&str> = groups[0].windows.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["Mail", "News", "Docs"]);
    }

    #[test]
    fn test_first_non_null_path_wins() {
        let groups = group_by_process(&browser_and_editor());

        assert_eq!(groups[0].executable_path, Some(PathBuf::from("C:\\chrome.exe")));
        assert_eq!(
            groups[1].executable_path,
            Some(PathBuf::from("C:\\Code\\Code.exe"))
        );
    }

    #[test]
    fn test_window_count_matches_windows() {
        for group in group_by_process(&browser_and_editor()) {
            assert_eq!(group.window_count, group.windows.len());
        }
    }

    #[test]
    fn test_running_applications_project_groups() {
        let apps = running_applications(group_by_process(&browser_and_editor()));

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].name, "chrome");
        assert_eq!(apps[0].window_count, 3);
        assert_eq!(apps[1].name, "code");
        assert_eq!(apps[1].path, Some(PathBuf::from("C:\\Code\\Code.exe")));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_process(&[]).is_empty());
        assert!(running_applications(Vec::new()).is_empty());
    }
}
