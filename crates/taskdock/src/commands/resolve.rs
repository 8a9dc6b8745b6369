use std::path::PathBuf;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use taskdock_core::Resolver;
use taskdock_core::events;
use taskdock_core::resolver::ResolutionSource;

use super::helpers::{format_partial_failure_error, load_config_with_warning};

/// One line of `resolve --json` output. Unresolved names carry nulls.
#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    name: &'a str,
    path: Option<PathBuf>,
    source: Option<ResolutionSource>,
}

pub(crate) fn handle_resolve_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<&String> = matches
        .get_many::<String>("names")
        .ok_or("At least one application name is required")?
        .collect();
    let json_output = matches.get_flag("json");
    let show_stats = matches.get_flag("stats");

    info!(event = "cli.resolve_started", count = names.len());

    let config = load_config_with_warning();
    let resolver = Resolver::from_config(&config);

    let mut results = Vec::with_capacity(names.len());
    for name in &names {
        let resolution = match resolver.resolve(name) {
            Ok(resolution) => resolution,
            Err(e) => {
                eprintln!("❌ Cannot resolve '{}': {}", name, e);
                error!(event = "cli.resolve_failed", name = %name, error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        };
        results.push(ResolveOutput {
            name: name.as_str(),
            path: resolution.as_ref().map(|r| r.path.clone()),
            source: resolution.map(|r| r.source),
        });
    }

    let failed = results.iter().filter(|r| r.path.is_none()).count();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            match (&result.path, &result.source) {
                (Some(path), Some(source)) => {
                    println!("✅ {} -> {} ({})", result.name, path.display(), source)
                }
                _ => println!("❌ {}: not found", result.name),
            }
        }
    }

    if show_stats {
        let stats = resolver.cache_stats();
        if json_output {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("Cache: {} entr{}", stats.size, if stats.size == 1 { "y" } else { "ies" });
            for key in &stats.keys {
                println!("   {}", key);
            }
        }
    }

    info!(
        event = "cli.resolve_completed",
        resolved = results.len() - failed,
        failed = failed
    );

    if failed > 0 {
        return Err(format_partial_failure_error("Resolve", failed, results.len()).into());
    }

    Ok(())
}
