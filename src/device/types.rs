//! Snapshot types for the device configuration groups

use std::fmt;

/// Opaque acknowledgement text returned by a device endpoint.
///
/// The device answers every configuration request with a short text or JSON
/// body. It is logged for diagnostics and never parsed for control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack(pub String);

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim())
    }
}

/// NTP time synchronization settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NtpConfig {
    pub enabled: bool,
    pub host: String,
    /// Update interval in minutes
    pub interval: u32,
    /// IANA timezone name, e.g. "Etc/UTC"
    pub timezone: String,
}

/// Light on/off schedule, times as "HH:MM" wall clock strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightSchedule {
    pub enabled: bool,
    pub start: String,
    pub end: String,
}

/// Home-Assistant MQTT integration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaIntegration {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub topic: String,
}

/// Clock face selection plus the regional quarter-hour option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub face: String,
    /// true selects "Dreiviertel", false "Viertel vor"
    pub alternate_quarters: bool,
}
