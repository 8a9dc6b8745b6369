use clap::ArgMatches;
use tracing::{info, warn};

use taskdock_core::windows::running_applications;
use taskdock_core::{Listing, WindowCatalog};

use super::helpers::load_config_with_warning;
use crate::table::TableFormatter;

const TITLE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 24;
const PATH_WIDTH: usize = 60;

pub(crate) fn handle_windows_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let grouped = matches.get_flag("grouped");
    let apps_only = matches.get_flag("apps");
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.windows_started",
        grouped = grouped,
        apps = apps_only
    );

    let config = load_config_with_warning();
    let catalog = WindowCatalog::from_config(&config.windows);

    if grouped || apps_only {
        let groups = warn_if_degraded(catalog.grouped_snapshot());

        if apps_only {
            let apps = running_applications(groups);
            if json_output {
                println!("{}", serde_json::to_string_pretty(&apps)?);
            } else if apps.is_empty() {
                println!("No running applications with windows found.");
            } else {
                let rows: Vec<Vec<String>> = apps
                    .iter()
                    .map(|app| {
                        vec![
                            app.name.clone(),
                            app.window_count.to_string(),
                            display_path(app.path.as_deref()),
                        ]
                    })
                    .collect();
                let table = TableFormatter::new(
                    &["Application", "Windows", "Path"],
                    &[NAME_WIDTH, 7, PATH_WIDTH],
                    &rows,
                );
                table.print_table(&rows);
            }
            info!(event = "cli.windows_completed", count = apps.len());
            return Ok(());
        }

        if json_output {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        } else if groups.is_empty() {
            println!("No windows found.");
        } else {
            for group in &groups {
                println!(
                    "{} ({} window{}) {}",
                    group.process_name,
                    group.window_count,
                    if group.window_count == 1 { "" } else { "s" },
                    display_path(group.executable_path.as_deref())
                );
                for window in &group.windows {
                    println!("   [{}] {}", window.window_handle, window.title);
                }
            }
        }
        info!(event = "cli.windows_completed", count = groups.len());
        return Ok(());
    }

    let windows = warn_if_degraded(catalog.snapshot());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else if windows.is_empty() {
        println!("No windows found.");
    } else {
        let rows: Vec<Vec<String>> = windows
            .iter()
            .map(|w| {
                vec![
                    w.window_handle.to_string(),
                    w.process_name.clone(),
                    w.process_id.to_string(),
                    w.title.clone(),
                ]
            })
            .collect();
        let table = TableFormatter::new(
            &["Handle", "Process", "PID", "Title"],
            &[20, NAME_WIDTH, 10, TITLE_WIDTH],
            &rows,
        );
        table.print_table(&rows);
    }

    info!(event = "cli.windows_completed", count = windows.len());

    Ok(())
}

/// Degraded listings print as empty; the reason goes to stderr.
fn warn_if_degraded<T>(listing: Listing<T>) -> Vec<T> {
    if let Listing::Degraded { reason } = &listing {
        eprintln!("⚠️  Window list unavailable: {}", reason);
        warn!(event = "cli.windows_degraded", reason = %reason);
    }
    listing.into_items()
}

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string())
}
