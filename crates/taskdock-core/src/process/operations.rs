use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::process::errors::ProcessError;
use crate::process::types::CommandOutput;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run an external command and collect its output, killing it if it
/// outlives `timeout`.
///
/// stdout and stderr are drained on background threads so a chatty child
/// cannot block on a full pipe while we poll for its exit. A timed-out child
/// is killed and reaped; nothing is retried.
///
/// The deadline also covers draining the pipes: a background process that
/// inherited them can keep them open after the child exits, and that counts
/// as a timeout too.
pub fn run_with_timeout(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<CommandOutput, ProcessError> {
    debug!(
        event = "core.process.run_started",
        program = program,
        arg_count = args.len(),
        timeout_ms = timeout.as_millis() as u64
    );

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ProcessError::SpawnFailed {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    let stdout_reader = child.stdout.take().map(spawn_reader);
    let stderr_reader = child.stderr.take().map(spawn_reader);

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                reap(&mut child, program);
                return Err(ProcessError::WaitFailed {
                    program: program.to_string(),
                    message: e.to_string(),
                });
            }
        }

        if start.elapsed() >= timeout {
            warn!(
                event = "core.process.run_timed_out",
                program = program,
                timeout_ms = timeout.as_millis() as u64
            );
            reap(&mut child, program);
            return Err(ProcessError::TimedOut {
                program: program.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            });
        }

        std::thread::sleep(POLL_INTERVAL);
    };

    let deadline = start + timeout;
    let (Some(stdout), Some(stderr)) = (
        collect(stdout_reader, deadline),
        collect(stderr_reader, deadline),
    ) else {
        warn!(
            event = "core.process.drain_timed_out",
            program = program,
            timeout_ms = timeout.as_millis() as u64,
            message = "Output pipes still open after exit - a background process may hold them"
        );
        return Err(ProcessError::TimedOut {
            program: program.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        });
    };

    let output = CommandOutput {
        success: status.success(),
        code: status.code(),
        stdout,
        stderr,
    };

    debug!(
        event = "core.process.run_completed",
        program = program,
        success = output.success,
        code = ?output.code,
        elapsed_ms = start.elapsed().as_millis() as u64
    );

    Ok(output)
}

/// Run an argv-style command line (`[program, args...]`) with extra
/// trailing arguments.
pub fn run_argv_with_timeout(
    argv: &[String],
    extra_args: &[String],
    timeout: Duration,
) -> Result<CommandOutput, ProcessError> {
    let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;
    let mut all_args = args.to_vec();
    all_args.extend_from_slice(extra_args);
    run_with_timeout(program, &all_args, timeout)
}

fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(buf);
    });
    rx
}

/// Wait for a reader's buffer until `deadline`. `None` means the pipe was
/// still open when the deadline passed.
fn collect(reader: Option<Receiver<Vec<u8>>>, deadline: Instant) -> Option<String> {
    let Some(rx) = reader else {
        return Some(String::new());
    };

    let bytes = match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(bytes) => bytes,
        Err(RecvTimeoutError::Timeout) => return None,
        Err(RecvTimeoutError::Disconnected) => Vec::new(),
    };
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Kill and reap a child we are abandoning (best-effort).
fn reap(child: &mut Child, program: &str) {
    if let Err(e) = child.kill() {
        debug!(
            event = "core.process.kill_failed",
            program = program,
            error = %e
        );
    }
    let _ = child.wait();
}
