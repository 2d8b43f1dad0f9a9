//! Parsing of `adb devices -l` output
//!
//! The output is a legend line followed by one line per device:
//!
//! ```text
//! List of devices attached
//! 0a388e93       device usb:1-1.4.2 product:razor model:Nexus_7 device:flo transport_id:1
//! emulator-5554  offline transport_id:2
//! ```
//!
//! The first two fields are the serial and the state. Everything after is a
//! `key:value` attribute, in no particular order. `serial_id:` and `state:`
//! attributes replace the positional values when present.

use serde::{Deserialize, Serialize};

use super::error::{DeviceListError, DeviceListErrorKind};

/// A device as reported by `adb devices -l`
///
/// See <https://developer.android.com/studio/command-line/adb#devicestatus>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Host-local connection id, 0 when adb did not report one (e.g. 1)
    #[serde(default)]
    pub transport_id: i64,

    /// Serial reported by the device, not guaranteed to be unique (e.g. "0a388e93")
    pub serial_id: String,

    /// Connection state, e.g. "device", "offline", "unauthorized"
    pub state: String,

    /// USB port the device is attached to (e.g. "1-1.4.2")
    #[serde(default)]
    pub usb: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub product: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,

    #[serde(rename = "device", default, skip_serializing_if = "String::is_empty")]
    pub device_name: String,
}

impl Device {
    /// Overwrite the attribute named by `key`
    ///
    /// Unknown keys are ignored.
    fn apply(&mut self, key: &str, value: &str) -> Result<(), DeviceListErrorKind> {
        match key {
            "transport_id" => {
                self.transport_id =
                    value
                        .parse()
                        .map_err(|source| DeviceListErrorKind::InvalidTransportId {
                            value: value.to_string(),
                            source,
                        })?;
            }
            "serial_id" => self.serial_id = value.to_string(),
            "state" => self.state = value.to_string(),
            "usb" => self.usb = value.to_string(),
            "product" => self.product = value.to_string(),
            "model" => self.model = value.to_string(),
            "device" => self.device_name = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}

/// Parse the output of `adb devices -l` into devices, in output order
///
/// The first line is always discarded. Parsing stops at the first blank line
/// or at the end of input; a final line without a trailing newline is not
/// considered complete and is ignored.
///
/// # Errors
///
/// Fails when a device line has fewer than two fields, or when a
/// `transport_id:` value is not an integer. The error keeps the devices
/// parsed before the offending line.
pub fn parse_device_list(raw: &[u8]) -> Result<Vec<Device>, DeviceListError> {
    let text = String::from_utf8_lossy(raw);
    let mut devices = Vec::new();

    for (index, segment) in text.split_inclusive('\n').enumerate().skip(1) {
        // Only an exact "\n" is blank; "\r\n" is a line with no fields.
        let Some(line) = segment.strip_suffix('\n') else {
            break;
        };
        if line.is_empty() {
            break;
        }

        match parse_device_line(line) {
            Ok(device) => devices.push(device),
            Err(kind) => return Err(DeviceListError::new(index + 1, kind, devices)),
        }
    }

    Ok(devices)
}

fn parse_device_line(line: &str) -> Result<Device, DeviceListErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(DeviceListErrorKind::TooFewFields {
            found: fields.len(),
        });
    }

    let mut device = Device {
        serial_id: fields[0].to_string(),
        state: fields[1].to_string(),
        ..Device::default()
    };

    // Tokens without a colon show up in real output and are not attributes.
    for (key, value) in fields[2..].iter().filter_map(|f| f.split_once(':')) {
        device.apply(key, value)?;
    }

    Ok(device)
}
