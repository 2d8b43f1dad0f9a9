//! Error types for adb operations
//!
//! This module defines the errors that can occur when running the adb
//! executable and when parsing the output of `adb devices -l`.

use std::num::ParseIntError;

use thiserror::Error;

use super::devices::Device;

/// Errors that can occur when running the adb executable
#[derive(Error, Debug)]
pub enum RunError {
    /// The executable is not installed or not in PATH
    #[error("{program} not found - ensure adb is installed and in PATH")]
    NotFound {
        /// Program that was looked up
        program: String,
    },

    /// Failed to spawn the process for any other reason
    #[error("failed to spawn adb process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The process exited with a non-zero exit code
    #[error("adb command failed (exit code {code}): {}", String::from_utf8_lossy(.stderr).trim_end())]
    Exited {
        /// Exit code from the adb process
        code: i32,
        /// Standard error output captured from adb, verbatim
        stderr: Vec<u8>,
    },

    /// The process was terminated by a signal before it could exit
    #[error("adb process was terminated by a signal")]
    Terminated,
}

impl RunError {
    /// Standard error bytes captured from the process
    ///
    /// Only a non-zero exit carries captured output; every other failure
    /// yields an empty slice.
    pub fn stderr(&self) -> &[u8] {
        match self {
            RunError::Exited { stderr, .. } => stderr,
            _ => &[],
        }
    }
}

/// Result type alias for adb invocations
pub type RunResult<T> = Result<T, RunError>;

/// Reason a device list could not be parsed
#[derive(Error, Debug)]
pub enum DeviceListErrorKind {
    /// A device line did not contain both a serial and a state
    #[error("expected at least 2 fields, found {found}")]
    TooFewFields {
        /// Number of whitespace-separated fields on the line
        found: usize,
    },

    /// A `transport_id:` attribute was not an integer
    #[error("invalid transport_id {value:?}: {source}")]
    InvalidTransportId {
        /// The raw attribute value
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure to parse `adb devices -l` output
///
/// Carries the devices that were parsed before the failing line, so callers
/// can decide whether a partial list is useful to them.
#[derive(Error, Debug)]
#[error("malformed device list at line {line}: {kind}")]
pub struct DeviceListError {
    /// 1-based line number in the raw output, header included
    pub line: usize,
    /// What was wrong with the line
    #[source]
    pub kind: DeviceListErrorKind,
    parsed: Vec<Device>,
}

impl DeviceListError {
    pub(crate) fn new(line: usize, kind: DeviceListErrorKind, parsed: Vec<Device>) -> Self {
        Self { line, kind, parsed }
    }

    /// Devices parsed before the failing line
    pub fn partial(&self) -> &[Device] {
        &self.parsed
    }

    /// Consume the error, keeping the devices parsed before the failing line
    pub fn into_partial(self) -> Vec<Device> {
        self.parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_only_for_exited() {
        let exited = RunError::Exited {
            code: 1,
            stderr: b"error: no devices/emulators found\n".to_vec(),
        };
        assert_eq!(exited.stderr(), b"error: no devices/emulators found\n");

        let not_found = RunError::NotFound {
            program: "adb".to_string(),
        };
        assert!(not_found.stderr().is_empty());
        assert!(RunError::Terminated.stderr().is_empty());
    }

    #[test]
    fn test_exited_display() {
        let err = RunError::Exited {
            code: 1,
            stderr: b"boom\n".to_vec(),
        };
        assert_eq!(err.to_string(), "adb command failed (exit code 1): boom");
    }

    #[test]
    fn test_device_list_error_display() {
        let err = DeviceListError::new(3, DeviceListErrorKind::TooFewFields { found: 1 }, vec![]);
        assert_eq!(
            err.to_string(),
            "malformed device list at line 3: expected at least 2 fields, found 1"
        );
    }
}
