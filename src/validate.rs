//! Input validation for the settings forms
//!
//! Every save operation validates its snapshot synchronously before a
//! request is built. A failure surfaces as a blocking alert and aborts the
//! save with no side effects.

use chrono::NaiveTime;
use thiserror::Error;

/// A rejected form snapshot. The message is shown verbatim in the alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid color format.")]
    InvalidColor,
    #[error("Invalid brightness value.")]
    InvalidBrightness,
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Invalid port value.")]
    InvalidPort,
    #[error("Invalid update interval.")]
    InvalidInterval,
    #[error("Invalid time, expected HH:MM.")]
    InvalidTime,
}

/// Strict `#RRGGBB` check, upper or lower case hex digits
pub fn color(input: &str) -> Result<&str, ValidationError> {
    let hex = input
        .strip_prefix('#')
        .ok_or(ValidationError::InvalidColor)?;
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(input)
    } else {
        Err(ValidationError::InvalidColor)
    }
}

/// Integer brightness in 0..=255
pub fn brightness(input: &str) -> Result<u8, ValidationError> {
    input
        .trim()
        .parse::<u8>()
        .map_err(|_| ValidationError::InvalidBrightness)
}

/// MQTT broker port
pub fn port(input: &str) -> Result<u16, ValidationError> {
    input
        .trim()
        .parse::<u16>()
        .map_err(|_| ValidationError::InvalidPort)
}

/// NTP update interval in minutes, must be positive
pub fn interval(input: &str) -> Result<u32, ValidationError> {
    match input.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ValidationError::InvalidInterval),
    }
}

/// Wall clock time in HH:MM
pub fn wall_time(input: &str) -> Result<&str, ValidationError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidTime)?;
    Ok(input)
}

/// Presence check for a required-field set
pub fn require_all<'a, I>(values: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    if values.into_iter().any(|value| value.trim().is_empty()) {
        Err(ValidationError::MissingRequiredFields)
    } else {
        Ok(())
    }
}
