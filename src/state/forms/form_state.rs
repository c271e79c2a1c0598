//! Form state for the three configuration views
//!
//! Field values start from the device's factory defaults. Each form knows
//! which switch and save group every field belongs to, and which of its
//! fields live inside a dependent section.

use super::field::FormField;
use crate::device::{ClockFace, HaIntegration, LightSchedule, NtpConfig};
use crate::state::{Section, SectionVisibilityMap, ToggleKind};
use crate::validate::{self, ValidationError};

/// Device factory defaults, mirrored so a fresh form matches a fresh device
mod defaults {
    pub const LIGHT_ON: bool = true;
    pub const LIGHT_COLOR: &str = "#FFFFFF";
    pub const AUTO_BRIGHTNESS: bool = true;
    pub const BRIGHTNESS: &str = "50";
    pub const NTP_ENABLED: bool = true;
    pub const NTP_HOST: &str = "0.pool.ntp.org";
    pub const NTP_INTERVAL: &str = "60";
    pub const NTP_TIMEZONE: &str = "Etc/UTC";
    pub const MQTT_PORT: &str = "1883";
    pub const MQTT_TOPIC: &str = "woc";
    pub const CLOCK_FACES: [&str; 1] = ["de-DE"];
}

/// One save operation per settings group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsGroup {
    LightColor,
    Brightness,
    Time,
    Ntp,
    Schedule,
    ClockFace,
    HaIntegration,
    Reset,
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// Whether a field is currently reachable, given section visibility
    fn is_field_visible(&self, index: usize, visibility: &SectionVisibilityMap) -> bool;

    /// Advance to the next visible field, wrapping around
    fn next_field(&mut self, visibility: &SectionVisibilityMap) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_field_visible(index, visibility) {
                self.set_active_field(index);
                return;
            }
        }
    }

    /// Move to the previous visible field, wrapping around
    fn prev_field(&mut self, visibility: &SectionVisibilityMap) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_field_visible(index, visibility) {
                self.set_active_field(index);
                return;
            }
        }
    }
}

// Light view: power, color, auto-brightness, manual brightness

#[derive(Debug, Clone)]
pub struct LightForm {
    pub light_on: FormField,
    pub color: FormField,
    pub auto_brightness: FormField,
    pub brightness: FormField,
    pub active_field_index: usize,
}

impl LightForm {
    pub fn new() -> Self {
        Self {
            light_on: FormField::toggle("lightToggle", "Light", defaults::LIGHT_ON),
            color: FormField::text_with_value(
                "lightColor",
                "Light color",
                defaults::LIGHT_COLOR.to_string(),
            ),
            auto_brightness: FormField::toggle(
                "autoBrightnessToggle",
                "Auto-brightness",
                defaults::AUTO_BRIGHTNESS,
            ),
            brightness: FormField::text_with_value(
                "brightnessSlider",
                "Brightness (0-255)",
                defaults::BRIGHTNESS.to_string(),
            ),
            active_field_index: 0,
        }
    }

    /// Switch bound to a field, if the field is one
    pub fn toggle_kind(&self, index: usize) -> Option<ToggleKind> {
        match index {
            0 => Some(ToggleKind::LightPower),
            2 => Some(ToggleKind::AutoBrightness),
            _ => None,
        }
    }

    /// Save group a field belongs to, for the save keypress
    pub fn group(&self, index: usize) -> Option<SettingsGroup> {
        match index {
            1 => Some(SettingsGroup::LightColor),
            3 => Some(SettingsGroup::Brightness),
            _ => None,
        }
    }

    pub fn color_snapshot(&self) -> Result<&str, ValidationError> {
        validate::color(self.color.as_text())
    }

    pub fn brightness_snapshot(&self) -> Result<u8, ValidationError> {
        validate::brightness(self.brightness.as_text())
    }
}

impl Default for LightForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LightForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.light_on,
            1 => &mut self.color,
            2 => &mut self.auto_brightness,
            _ => &mut self.brightness,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.light_on),
            1 => Some(&self.color),
            2 => Some(&self.auto_brightness),
            3 => Some(&self.brightness),
            _ => None,
        }
    }
    fn is_field_visible(&self, index: usize, visibility: &SectionVisibilityMap) -> bool {
        match index {
            3 => visibility.is_visible(Section::BrightnessSlider),
            _ => index < self.field_count(),
        }
    }
}

// Time view: manual time, NTP configuration, light schedule

#[derive(Debug, Clone)]
pub struct TimeForm {
    pub time: FormField,
    pub ntp_enabled: FormField,
    pub ntp_host: FormField,
    pub ntp_interval: FormField,
    pub ntp_timezone: FormField,
    pub schedule_enabled: FormField,
    pub schedule_start: FormField,
    pub schedule_end: FormField,
    pub active_field_index: usize,
}

impl TimeForm {
    pub fn new() -> Self {
        Self {
            time: FormField::text("setTime", "Time (HH:MM)"),
            ntp_enabled: FormField::toggle(
                "ntpTimeUpdate",
                "NTP time update",
                defaults::NTP_ENABLED,
            ),
            ntp_host: FormField::text_with_value(
                "ntpServer",
                "NTP server",
                defaults::NTP_HOST.to_string(),
            ),
            ntp_interval: FormField::text_with_value(
                "ntpUpdateInterval",
                "Update interval (min)",
                defaults::NTP_INTERVAL.to_string(),
            ),
            ntp_timezone: FormField::text_with_value(
                "timezoneSelect",
                "Timezone",
                defaults::NTP_TIMEZONE.to_string(),
            ),
            schedule_enabled: FormField::toggle("lightScheduleToggle", "Light schedule", false),
            schedule_start: FormField::text("startTime", "Schedule start (HH:MM)"),
            schedule_end: FormField::text("endTime", "Schedule end (HH:MM)"),
            active_field_index: 0,
        }
    }

    pub fn toggle_kind(&self, index: usize) -> Option<ToggleKind> {
        match index {
            1 => Some(ToggleKind::NtpUpdate),
            5 => Some(ToggleKind::LightSchedule),
            _ => None,
        }
    }

    pub fn group(&self, index: usize) -> Option<SettingsGroup> {
        match index {
            0 => Some(SettingsGroup::Time),
            1..=4 => Some(SettingsGroup::Ntp),
            5..=7 => Some(SettingsGroup::Schedule),
            _ => None,
        }
    }

    pub fn time_snapshot(&self) -> Result<&str, ValidationError> {
        validate::wall_time(self.time.as_text())
    }

    /// NTP snapshot. While disabled only the flag travels, so the dependent
    /// fields are passed through without validation.
    pub fn ntp_snapshot(&self) -> Result<NtpConfig, ValidationError> {
        let enabled = self.ntp_enabled.is_on();
        let interval = if enabled {
            validate::require_all([self.ntp_host.as_text(), self.ntp_timezone.as_text()])?;
            validate::interval(self.ntp_interval.as_text())?
        } else {
            0
        };
        Ok(NtpConfig {
            enabled,
            host: self.ntp_host.as_text().to_string(),
            interval,
            timezone: self.ntp_timezone.as_text().to_string(),
        })
    }

    pub fn schedule_snapshot(&self) -> Result<LightSchedule, ValidationError> {
        let enabled = self.schedule_enabled.is_on();
        if enabled {
            validate::wall_time(self.schedule_start.as_text())?;
            validate::wall_time(self.schedule_end.as_text())?;
        }
        Ok(LightSchedule {
            enabled,
            start: self.schedule_start.as_text().trim().to_string(),
            end: self.schedule_end.as_text().trim().to_string(),
        })
    }
}

impl Default for TimeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for TimeForm {
    fn field_count(&self) -> usize {
        8
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(7);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.time,
            1 => &mut self.ntp_enabled,
            2 => &mut self.ntp_host,
            3 => &mut self.ntp_interval,
            4 => &mut self.ntp_timezone,
            5 => &mut self.schedule_enabled,
            6 => &mut self.schedule_start,
            _ => &mut self.schedule_end,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.time),
            1 => Some(&self.ntp_enabled),
            2 => Some(&self.ntp_host),
            3 => Some(&self.ntp_interval),
            4 => Some(&self.ntp_timezone),
            5 => Some(&self.schedule_enabled),
            6 => Some(&self.schedule_start),
            7 => Some(&self.schedule_end),
            _ => None,
        }
    }
    fn is_field_visible(&self, index: usize, visibility: &SectionVisibilityMap) -> bool {
        match index {
            2..=4 => visibility.is_visible(Section::NtpSettings),
            6 | 7 => visibility.is_visible(Section::ScheduleSettings),
            _ => index < self.field_count(),
        }
    }
}

// System view: clock face, Home-Assistant integration, factory reset

#[derive(Debug, Clone)]
pub struct SystemForm {
    pub clock_face: FormField,
    pub clock_face_option: FormField,
    pub ha_enabled: FormField,
    pub mqtt_host: FormField,
    pub mqtt_port: FormField,
    pub mqtt_username: FormField,
    pub mqtt_password: FormField,
    pub mqtt_topic: FormField,
    pub reset_armed: FormField,
    pub active_field_index: usize,
}

impl SystemForm {
    /// Index of the reset button row (no FormField behind it)
    pub const RESET_BUTTON_INDEX: usize = 9;

    pub fn new() -> Self {
        Self {
            clock_face: FormField::select(
                "clockFaceSelect",
                "Clock face",
                &defaults::CLOCK_FACES,
            ),
            clock_face_option: FormField::toggle("clockFaceOptionToggle", "Quarter display", false),
            ha_enabled: FormField::toggle(
                "haIntegrationToggle",
                "Home Assistant integration",
                false,
            ),
            mqtt_host: FormField::text("brokerIP", "Broker IP"),
            mqtt_port: FormField::text_with_value(
                "brokerPort",
                "Broker port",
                defaults::MQTT_PORT.to_string(),
            ),
            mqtt_username: FormField::text("mqttUsername", "MQTT username"),
            mqtt_password: FormField::secret("mqttPassword", "MQTT password"),
            mqtt_topic: FormField::text_with_value(
                "defaultTopic",
                "Default topic",
                defaults::MQTT_TOPIC.to_string(),
            ),
            reset_armed: FormField::toggle("resetConfiguration", "Reset configuration", false),
            active_field_index: 0,
        }
    }

    /// Whether the reset button row is currently active
    #[allow(dead_code)]
    pub fn is_reset_button_active(&self) -> bool {
        self.active_field_index == Self::RESET_BUTTON_INDEX
    }

    pub fn toggle_kind(&self, index: usize) -> Option<ToggleKind> {
        match index {
            1 => Some(ToggleKind::ClockFaceOption),
            2 => Some(ToggleKind::HaIntegration),
            8 => Some(ToggleKind::ResetConfirm),
            _ => None,
        }
    }

    pub fn group(&self, index: usize) -> Option<SettingsGroup> {
        match index {
            0 | 1 => Some(SettingsGroup::ClockFace),
            2..=7 => Some(SettingsGroup::HaIntegration),
            Self::RESET_BUTTON_INDEX => Some(SettingsGroup::Reset),
            _ => None,
        }
    }

    pub fn clock_face_snapshot(&self) -> ClockFace {
        ClockFace {
            face: self.clock_face.as_text().to_string(),
            alternate_quarters: self.clock_face_option.is_on(),
        }
    }

    /// Presence of host, port and topic is refused up front, even when
    /// disabling. The port value itself is only parsed when enabled, since
    /// it only travels then.
    pub fn ha_snapshot(&self) -> Result<HaIntegration, ValidationError> {
        validate::require_all([
            self.mqtt_host.as_text(),
            self.mqtt_port.as_text(),
            self.mqtt_topic.as_text(),
        ])?;
        let enabled = self.ha_enabled.is_on();
        let port = if enabled {
            validate::port(self.mqtt_port.as_text())?
        } else {
            0
        };
        Ok(HaIntegration {
            enabled,
            host: self.mqtt_host.as_text().trim().to_string(),
            port,
            username: self.mqtt_username.as_text().to_string(),
            password: self.mqtt_password.as_text().to_string(),
            topic: self.mqtt_topic.as_text().trim().to_string(),
        })
    }
}

impl Default for SystemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SystemForm {
    fn field_count(&self) -> usize {
        10 // nine fields plus the reset button row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::RESET_BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.clock_face,
            1 => &mut self.clock_face_option,
            2 => &mut self.ha_enabled,
            3 => &mut self.mqtt_host,
            4 => &mut self.mqtt_port,
            5 => &mut self.mqtt_username,
            6 => &mut self.mqtt_password,
            7 => &mut self.mqtt_topic,
            // For the button row, return reset_armed as dummy (not edited)
            _ => &mut self.reset_armed,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.clock_face),
            1 => Some(&self.clock_face_option),
            2 => Some(&self.ha_enabled),
            3 => Some(&self.mqtt_host),
            4 => Some(&self.mqtt_port),
            5 => Some(&self.mqtt_username),
            6 => Some(&self.mqtt_password),
            7 => Some(&self.mqtt_topic),
            8 => Some(&self.reset_armed),
            _ => None,
        }
    }
    fn is_field_visible(&self, index: usize, visibility: &SectionVisibilityMap) -> bool {
        match index {
            3..=7 => visibility.is_visible(Section::MqttSettings),
            Self::RESET_BUTTON_INDEX => visibility.is_visible(Section::ResetControls),
            _ => index < self.field_count(),
        }
    }
}
