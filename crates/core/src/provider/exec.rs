//! `exec` provider: external command execution

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

use crate::lookup::Strategy;
use crate::provider::error::LookupError;

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run the command named by `args` (argv order) and parse its combined
/// stdout/stderr as a JSON lookup result.
///
/// Fails on spawn error, timeout, non-zero exit, or non-JSON output.
pub(crate) fn run(args: &[String], timeout: Duration) -> Result<Value, LookupError> {
    let [program, rest @ ..] = args else {
        return Err(LookupError::WrongArgumentCount {
            strategy: Strategy::Exec,
            expected: "at least 1",
            actual: args.len(),
        });
    };
    let command_line = args.join(" ");

    debug!(command = %command_line, "running exec lookup");

    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| LookupError::CommandSpawn {
            command: command_line.clone(),
            source,
        })?;

    // Drain both pipes off-thread so a chatty command cannot deadlock the
    // deadline loop on a full pipe buffer.
    let stdout_reader = spawn_pipe_reader(child.stdout.take());
    let stderr_reader = spawn_pipe_reader(child.stderr.take());

    let status = wait_with_deadline(&mut child, timeout).map_err(|source| {
        LookupError::CommandSpawn {
            command: command_line.clone(),
            source,
        }
    })?;

    let mut output = stdout_reader
        .join()
        .unwrap_or_default();
    let stderr_output = stderr_reader
        .join()
        .unwrap_or_default();
    output.push_str(&stderr_output);

    let Some(status) = status else {
        return Err(LookupError::CommandTimeout {
            command: command_line,
            timeout,
        });
    };

    if !status.success() {
        return Err(LookupError::CommandFailed {
            command: command_line,
            status,
            output: output.trim().to_string(),
        });
    }

    serde_json::from_str(output.trim()).map_err(|source| LookupError::CommandOutput {
        command: command_line,
        source,
    })
}

fn spawn_pipe_reader<R>(pipe: Option<R>) -> thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buffer = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buffer);
        }
        buffer
    })
}

/// Poll the child until it exits or the deadline passes. Returns `None` on
/// timeout, after killing the child so the pipe readers see EOF.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(WAIT_POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn empty_argv_reports_arity() {
        let err = run(&[], DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, LookupError::WrongArgumentCount { .. }));
    }

    #[test]
    fn command_output_is_parsed_as_json() {
        let value = run(
            &args(&["echo", r#"{"external_address": "198.51.100.4"}"#]),
            DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert_eq!(value["external_address"], "198.51.100.4");
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let err = run(&args(&["/nonexistent/beacon-helper"]), DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, LookupError::CommandSpawn { .. }));
    }

    #[test]
    fn non_zero_exit_fails() {
        let err = run(&args(&["false"]), DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, LookupError::CommandFailed { .. }));
    }

    #[test]
    fn non_json_output_fails() {
        let err = run(&args(&["echo", "not json"]), DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, LookupError::CommandOutput { .. }));
    }

    #[test]
    fn stderr_noise_is_part_of_the_parsed_output() {
        // Combined capture means stderr output lands in the parse input.
        let err = run(
            &args(&[
                "sh",
                "-c",
                r#"echo '{"external_address": "198.51.100.4"}'; echo noise >&2"#,
            ]),
            DEFAULT_TIMEOUT,
        )
        .unwrap_err();
        assert!(matches!(err, LookupError::CommandOutput { .. }));
    }

    #[test]
    fn slow_command_times_out() {
        let err = run(
            &args(&["sleep", "5"]),
            Duration::from_millis(100),
        )
        .unwrap_err();
        assert!(matches!(err, LookupError::CommandTimeout { .. }));
    }

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}
