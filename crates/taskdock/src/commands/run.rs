use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use clap::ArgMatches;
use tracing::{error, info};

use taskdock_core::Resolver;
use taskdock_core::events;

use super::helpers::load_config_with_warning;

/// Resolve an application and start it without waiting for it to exit.
pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Application name is required")?;
    let args: Vec<&String> = matches
        .get_many::<String>("args")
        .map(|values| values.collect())
        .unwrap_or_default();

    info!(event = "cli.run_started", name = %name);

    let config = load_config_with_warning();
    let resolver = Resolver::from_config(&config);

    let resolution = match resolver.resolve(name) {
        Ok(Some(resolution)) => resolution,
        Ok(None) => {
            eprintln!("❌ Application '{}' not found", name);
            error!(event = "cli.run_failed", name = %name, reason = "not_found");
            return Err(format!("Application '{}' not found", name).into());
        }
        Err(e) => {
            eprintln!("❌ Cannot resolve '{}': {}", name, e);
            error!(event = "cli.run_failed", name = %name, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let child = Command::new(launch_path(&resolution.path))
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            eprintln!(
                "❌ Failed to launch {}: {}",
                resolution.path.display(),
                e
            );
            error!(
                event = "cli.run_failed",
                name = %name,
                path = %resolution.path.display(),
                error = %e
            );
            e
        })?;

    println!("✅ Launched {}", name);
    println!("   Path: {}", resolution.path.display());
    println!("   PID: {}", child.id());

    info!(
        event = "cli.run_completed",
        name = %name,
        path = %resolution.path.display(),
        source = %resolution.source,
        pid = child.id()
    );

    Ok(())
}

/// Path handed to `Command::new`.
///
/// A bare file name there is looked up on `PATH`, so a relative resolution
/// is made absolute against the working directory first.
fn launch_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::fs::canonicalize(path).unwrap_or_else(|_| Path::new(".").join(path))
}
