use clap::ArgMatches;
use tracing::{error, info};

use taskdock_core::events;
use taskdock_core::{WindowCatalog, WindowHandle};

use super::helpers::load_config_with_warning;

pub(crate) fn handle_focus_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("handle")
        .ok_or("Window handle is required")?;

    let handle = match WindowHandle::parse(raw) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("❌ Invalid window handle '{}': {}", raw, e);
            error!(event = "cli.focus_failed", handle = %raw, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    info!(event = "cli.focus_started", handle = %handle);

    let config = load_config_with_warning();
    let catalog = WindowCatalog::from_config(&config.windows);

    if catalog.focus_window(&handle) {
        println!("✅ Focused window {}", handle);
        info!(event = "cli.focus_completed", handle = %handle);
        Ok(())
    } else {
        eprintln!("❌ Could not focus window {}", handle);
        error!(event = "cli.focus_failed", handle = %handle);
        Err(format!("Could not focus window {}", handle).into())
    }
}
