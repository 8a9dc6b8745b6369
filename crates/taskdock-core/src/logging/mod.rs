use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
///
/// Events go to stderr as JSON lines so stdout stays pipeable.
pub fn init_logging(quiet: bool) {
    let directive = if quiet {
        "taskdock=error,taskdock_core=error"
    } else {
        "taskdock=info,taskdock_core=info"
    };

    let mut filter = EnvFilter::from_default_env();
    for part in directive.split(',') {
        match part.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Warning: invalid log directive '{}': {}", part, e),
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
