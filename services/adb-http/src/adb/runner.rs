//! Async runner for adb commands
//!
//! Every call spawns exactly one adb process and waits for it to exit. There
//! is no retry and no timeout: a hung adb keeps the calling request waiting.
//!
//! # Example
//!
//! ```rust,ignore
//! use adb_http::adb::{AdbRunner, CommandRunner};
//!
//! let stdout = AdbRunner::default().run(&["devices", "-l"]).await?;
//! ```

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::error::{RunError, RunResult};

/// Default program name, resolved through PATH
pub const DEFAULT_ADB_PROGRAM: &str = "adb";

/// Something that can run an adb command to completion
///
/// Handlers only see this trait, so tests can swap in a fake.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run adb with `args` and return its standard output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The process fails to spawn
    /// - The process exits with a non-zero status (stderr is captured)
    /// - The process is terminated by a signal
    async fn run(&self, args: &[&str]) -> RunResult<Vec<u8>>;
}

/// Runs the real adb executable
#[derive(Debug, Clone)]
pub struct AdbRunner {
    program: String,
}

impl AdbRunner {
    /// Create a runner for the given program name or path
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this runner invokes
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for AdbRunner {
    fn default() -> Self {
        Self::new(DEFAULT_ADB_PROGRAM)
    }
}

#[async_trait]
impl CommandRunner for AdbRunner {
    #[instrument(skip(self), fields(program = %self.program, cmd = %args.join(" ")))]
    async fn run(&self, args: &[&str]) -> RunResult<Vec<u8>> {
        debug!("executing: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RunError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    RunError::Spawn(e)
                }
            })?
            .wait_with_output()
            .await?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        match output.status.code() {
            Some(code) => {
                warn!(
                    code,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                    "adb command failed"
                );
                Err(RunError::Exited {
                    code,
                    stderr: output.stderr,
                })
            }
            None => {
                warn!("adb process terminated by signal");
                Err(RunError::Terminated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program() {
        assert_eq!(AdbRunner::default().program(), "adb");
    }

    #[tokio::test]
    async fn test_missing_program_is_not_found() {
        let runner = AdbRunner::new("adb-http-test-no-such-program");
        let err = runner.run(&["help"]).await.unwrap_err();
        assert!(matches!(err, RunError::NotFound { .. }), "got {err:?}");
        assert!(err.stderr().is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_captures_stdout_only() {
        let runner = AdbRunner::new("sh");
        let stdout = runner
            .run(&["-c", "printf 'List of devices attached\\n'; echo noise >&2"])
            .await
            .unwrap();
        assert_eq!(stdout, b"List of devices attached\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_arguments_passed_verbatim() {
        let runner = AdbRunner::new("sh");
        let stdout = runner
            .run(&["-c", "printf '%s|' \"$@\"", "sh", "devices", "-l", "a b"])
            .await
            .unwrap();
        assert_eq!(stdout, b"devices|-l|a b|");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_captures_stderr() {
        let runner = AdbRunner::new("sh");
        let err = runner
            .run(&["-c", "echo partial; printf 'no devices/emulators found' >&2; exit 1"])
            .await
            .unwrap_err();
        match &err {
            RunError::Exited { code, stderr } => {
                assert_eq!(*code, 1);
                assert_eq!(stderr, b"no devices/emulators found");
            }
            other => panic!("expected Exited, got {other:?}"),
        }
        assert_eq!(err.stderr(), b"no devices/emulators found");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_with_empty_stderr() {
        let runner = AdbRunner::new("sh");
        let err = runner.run(&["-c", "exit 3"]).await.unwrap_err();
        assert!(matches!(err, RunError::Exited { code: 3, .. }), "got {err:?}");
        assert!(err.stderr().is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_killed_process_has_no_stderr() {
        let runner = AdbRunner::new("sh");
        let err = runner
            .run(&["-c", "echo dying >&2; kill -9 $$"])
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::Terminated), "got {err:?}");
        assert!(err.stderr().is_empty());
    }

    #[test]
    #[ignore = "requires adb installed"]
    fn test_real_adb_help() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        // Older adb releases print help to stderr and exit 1.
        match rt.block_on(AdbRunner::default().run(&["help"])) {
            Ok(stdout) => assert!(!stdout.is_empty()),
            Err(RunError::Exited { stderr, .. }) => assert!(!stderr.is_empty()),
            Err(e) => panic!("adb help failed: {e}"),
        }
    }
}
