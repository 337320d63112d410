// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MAX! device types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type of a MAX! radio device, as carried in its pairing messages.
///
/// Codes `0xfb` to `0xff` are not part of the MAX! protocol; they mark
/// internal modes of the radio interface.
///
/// # Examples
///
/// ```
/// use habtools_lib::types::DeviceType;
///
/// assert_eq!(DeviceType::from_code(3), DeviceType::WallThermostat);
/// assert_eq!(DeviceType::WallThermostat.code(), 3);
///
/// // Unknown codes fall back to `Unknown`
/// assert_eq!(DeviceType::from_code(42), DeviceType::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// MAX! Cube gateway.
    Cube,
    /// Radiator thermostat.
    RadiatorThermostat,
    /// Radiator thermostat plus.
    RadiatorThermostatPlus,
    /// Wall mounted thermostat.
    WallThermostat,
    /// Window/door shutter contact.
    ShutterContact,
    /// Eco push button.
    PushButton,
    /// LED mode of the radio interface.
    LedMode,
    /// Credit monitor of the radio interface.
    CreditMonitor,
    /// Pairing mode of the radio interface.
    PairMode,
    /// Listen mode of the radio interface.
    ListenMode,
    /// Unrecognized device type.
    Unknown,
}

impl DeviceType {
    /// All device types, in code order.
    pub const ALL: [Self; 11] = [
        Self::Cube,
        Self::RadiatorThermostat,
        Self::RadiatorThermostatPlus,
        Self::WallThermostat,
        Self::ShutterContact,
        Self::PushButton,
        Self::LedMode,
        Self::CreditMonitor,
        Self::PairMode,
        Self::ListenMode,
        Self::Unknown,
    ];

    /// Returns the numeric device type code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Cube => 0,
            Self::RadiatorThermostat => 1,
            Self::RadiatorThermostatPlus => 2,
            Self::WallThermostat => 3,
            Self::ShutterContact => 4,
            Self::PushButton => 5,
            Self::LedMode => 0xfb,
            Self::CreditMonitor => 0xfc,
            Self::PairMode => 0xfd,
            Self::ListenMode => 0xfe,
            Self::Unknown => 0xff,
        }
    }

    /// Returns the device type for a code, or [`DeviceType::Unknown`].
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        Self::ALL
            .into_iter()
            .find(|device_type| device_type.code() == code)
            .unwrap_or(Self::Unknown)
    }

    /// Returns true for device types defined by the MAX! protocol.
    #[must_use]
    pub const fn is_official(self) -> bool {
        self.code() < 0xfb
    }

    /// Returns a human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::RadiatorThermostat => "Radiator Thermostat",
            Self::RadiatorThermostatPlus => "Radiator Thermostat Plus",
            Self::WallThermostat => "Wall Thermostat",
            Self::ShutterContact => "Shutter Contact",
            Self::PushButton => "Push Button",
            Self::LedMode => "LED Mode",
            Self::CreditMonitor => "Credit Monitor",
            Self::PairMode => "Pair Mode",
            Self::ListenMode => "Listen Mode",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<u8> for DeviceType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<DeviceType> for u8 {
    fn from(device_type: DeviceType) -> Self {
        device_type.code()
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
