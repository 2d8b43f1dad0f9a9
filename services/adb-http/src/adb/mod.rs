//! adb CLI wrapper module
//!
//! This module runs the adb executable and parses its output.

pub mod devices;
pub mod error;
pub mod runner;

pub use devices::{parse_device_list, Device};
pub use error::{DeviceListError, DeviceListErrorKind, RunError, RunResult};
pub use runner::{AdbRunner, CommandRunner};
