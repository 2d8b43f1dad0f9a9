//! Shared application state

use std::sync::Arc;

use crate::adb::{parse_device_list, CommandRunner, Device, DeviceListError};

/// Parser applied to the stdout of `adb devices -l`
pub type DeviceListParser = fn(&[u8]) -> Result<Vec<Device>, DeviceListError>;

/// Collaborators injected into the request handlers
///
/// Nothing in here is mutable, so cloning it per request is all the
/// isolation the handlers need.
#[derive(Clone)]
pub struct AppState {
    /// Runs adb
    pub runner: Arc<dyn CommandRunner>,
    /// Turns `adb devices -l` output into devices
    pub parse_devices: DeviceListParser,
}

impl AppState {
    /// Create app state using the standard device list parser
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            parse_devices: parse_device_list,
        }
    }

    /// Replace the device list parser
    pub fn with_parser(mut self, parse_devices: DeviceListParser) -> Self {
        self.parse_devices = parse_devices;
        self
    }
}
