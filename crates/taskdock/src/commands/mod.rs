use clap::ArgMatches;
use tracing::error;

use taskdock_core::events;

pub mod helpers;

mod completions;
mod focus;
mod resolve;
mod run;
mod windows;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("resolve", sub_matches)) => resolve::handle_resolve_command(sub_matches),
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("windows", sub_matches)) => windows::handle_windows_command(sub_matches),
        Some(("focus", sub_matches)) => focus::handle_focus_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
