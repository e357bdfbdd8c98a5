//! Runs the external formula recalculation helper over a written workbook.
//!
//! The helper is best effort: every outcome is reported, none is an error.

use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);
/// How long a killed helper's pipes are read before they are abandoned.
const DRAIN_GRACE: Duration = Duration::from_millis(250);

/// How to invoke the helper: `program leading_args.. <file> trailing_args..`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecalcConfig {
    pub program: String,
    pub leading_args: Vec<String>,
    pub trailing_args: Vec<String>,
    /// The child is killed once this elapses.
    pub timeout: Duration,
}

impl Default for RecalcConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            leading_args: vec!["/mnt/skills/public/xlsx/scripts/recalc.py".to_string()],
            trailing_args: vec!["30".to_string()],
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecalcOutcome {
    Completed { status: ExitStatus, stdout: String },
    /// The helper could not be started or exited unsuccessfully.
    Failed(String),
    TimedOut(Duration),
}

impl RecalcOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecalcOutcome::Completed { .. })
    }

    /// A one-line explanation for anything but success.
    pub fn note(&self) -> Option<String> {
        match self {
            RecalcOutcome::Completed { .. } => None,
            RecalcOutcome::Failed(reason) => Some(reason.clone()),
            RecalcOutcome::TimedOut(after) => Some(format!("timed out after {}s", after.as_secs_f32())),
        }
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        // A read error leaves whatever arrived before it.
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Waits for a drained pipe until `until`. A grandchild holding the pipe
/// open past that point leaves its reader thread detached.
fn collect(pipe: Option<Receiver<String>>, until: Instant) -> String {
    pipe
        .and_then(|rx| rx.recv_timeout(until.saturating_duration_since(Instant::now())).ok())
        .unwrap_or_default()
}

/// Runs the helper on `path` and waits for it, at most `config.timeout`.
pub fn run(path: &Path, config: &RecalcConfig) -> RecalcOutcome {
    let spawned = Command::new(&config.program)
        .args(&config.leading_args)
        .arg(path)
        .args(&config.trailing_args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();
    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            let outcome = RecalcOutcome::Failed(format!("could not start '{}': {e}", config.program));
            log::warn!("Recalculation skipped for {}: {e}", path.display());
            return outcome;
        }
    };

    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);
    let deadline = Instant::now() + config.timeout;

    let waited = loop {
        match child.try_wait() {
            Ok(Some(status)) => break Ok(status),
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                break Err(RecalcOutcome::TimedOut(config.timeout));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                break Err(RecalcOutcome::Failed(format!("waiting on '{}' failed: {e}", config.program)));
            }
        }
    };
    let until = match waited {
        Ok(_) => deadline.max(Instant::now() + DRAIN_GRACE),
        Err(_) => Instant::now() + DRAIN_GRACE,
    };
    let stdout = collect(stdout, until);
    let stderr = collect(stderr, until);

    let outcome = match waited {
        Ok(status) if status.success() => RecalcOutcome::Completed { status, stdout },
        Ok(status) => {
            let detail = stderr.trim();
            RecalcOutcome::Failed(if detail.is_empty() {
                format!("'{}' exited with {status}", config.program)
            } else {
                format!("'{}' exited with {status}: {detail}", config.program)
            })
        }
        Err(outcome) => outcome,
    };

    match outcome.note() {
        None => log::info!("Recalculated formulas in {}", path.display()),
        Some(note) => log::warn!("Recalculation of {} did not complete: {note}", path.display()),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(script: &str, timeout: Duration) -> RecalcConfig {
        RecalcConfig {
            program: "sh".to_string(),
            leading_args: vec!["-c".to_string(), script.to_string()],
            trailing_args: Vec::new(),
            timeout,
        }
    }

    #[test]
    fn default_invocation() {
        let config = RecalcConfig::default();
        assert_eq!(config.program, "python3");
        assert_eq!(config.trailing_args, ["30"]);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn missing_program_is_a_failure_not_a_panic() {
        let config = RecalcConfig {
            program: "/nonexistent/harbor-recalc".to_string(),
            ..RecalcConfig::default()
        };
        let outcome = run(Path::new("ledger.xlsx"), &config);
        assert!(matches!(outcome, RecalcOutcome::Failed(_)));
        assert!(outcome.note().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_on_success() {
        let outcome = run(Path::new("ledger.xlsx"), &shell("echo recalculated", Duration::from_secs(10)));
        match outcome {
            RecalcOutcome::Completed { status, stdout } => {
                assert!(status.success());
                assert_eq!(stdout.trim(), "recalculated");
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_carries_stderr() {
        let outcome = run(Path::new("ledger.xlsx"), &shell("echo broken >&2; exit 3", Duration::from_secs(10)));
        match outcome {
            RecalcOutcome::Failed(reason) => assert!(reason.contains("broken"), "{reason}"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn slow_helpers_are_killed() {
        let started = Instant::now();
        let outcome = run(Path::new("ledger.xlsx"), &shell("exec sleep 5", Duration::from_millis(200)));
        assert_eq!(outcome, RecalcOutcome::TimedOut(Duration::from_millis(200)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn grandchildren_holding_the_pipes_do_not_stall_the_timeout() {
        let started = Instant::now();
        let outcome = run(Path::new("ledger.xlsx"), &shell("sleep 5; true", Duration::from_millis(200)));
        assert_eq!(outcome, RecalcOutcome::TimedOut(Duration::from_millis(200)));
        assert!(started.elapsed() < Duration::from_secs(2), "took {:?}", started.elapsed());
    }

    #[cfg(unix)]
    #[test]
    fn background_grandchild_after_success_is_not_awaited() {
        let started = Instant::now();
        let outcome = run(Path::new("ledger.xlsx"), &shell("sleep 5 & echo done", Duration::from_millis(500)));
        assert!(outcome.is_success(), "{outcome:?}");
        assert!(started.elapsed() < Duration::from_secs(2), "took {:?}", started.elapsed());
    }
}
