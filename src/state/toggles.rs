//! Dependent-section visibility contract
//!
//! Each switch controls at most one dependent section. Visibility is a pure
//! function of the switch state, so startup initialization and a user
//! keypress produce identical results; only the origin decides whether a
//! save request may fire.

/// Visibility of a dependent settings section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionVisibility {
    #[default]
    Hidden,
    Visible,
}

impl SectionVisibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Distinguishes programmatic startup application from a user keypress.
/// Save-on-change rules apply only to user-driven transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOrigin {
    Initializing,
    UserDriven,
}

/// Dependent sections, one per controlling switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BrightnessSlider,
    NtpSettings,
    ScheduleSettings,
    MqttSettings,
    ResetControls,
}

/// Switches wired into the visibility and save contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    LightPower,
    AutoBrightness,
    NtpUpdate,
    LightSchedule,
    HaIntegration,
    ResetConfirm,
    ClockFaceOption,
}

impl ToggleKind {
    /// The section this switch reveals or hides, if any
    pub fn section(self) -> Option<Section> {
        match self {
            Self::AutoBrightness => Some(Section::BrightnessSlider),
            Self::NtpUpdate => Some(Section::NtpSettings),
            Self::LightSchedule => Some(Section::ScheduleSettings),
            Self::HaIntegration => Some(Section::MqttSettings),
            Self::ResetConfirm => Some(Section::ResetControls),
            Self::LightPower | Self::ClockFaceOption => None,
        }
    }

    /// Auto-brightness hides the manual slider while on; every other switch
    /// reveals its section while on.
    fn reveals_when_on(self) -> bool {
        !matches!(self, Self::AutoBrightness)
    }

    /// Visibility of the bound section for a given switch state
    pub fn visibility(self, checked: bool) -> SectionVisibility {
        if checked == self.reveals_when_on() {
            SectionVisibility::Visible
        } else {
            SectionVisibility::Hidden
        }
    }
}

/// Visibility for every dependent section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionVisibilityMap {
    pub brightness_slider: SectionVisibility,
    pub ntp_settings: SectionVisibility,
    pub schedule_settings: SectionVisibility,
    pub mqtt_settings: SectionVisibility,
    pub reset_controls: SectionVisibility,
}

impl SectionVisibilityMap {
    pub fn get(&self, section: Section) -> SectionVisibility {
        match section {
            Section::BrightnessSlider => self.brightness_slider,
            Section::NtpSettings => self.ntp_settings,
            Section::ScheduleSettings => self.schedule_settings,
            Section::MqttSettings => self.mqtt_settings,
            Section::ResetControls => self.reset_controls,
        }
    }

    pub fn set(&mut self, section: Section, visibility: SectionVisibility) {
        match section {
            Section::BrightnessSlider => self.brightness_slider = visibility,
            Section::NtpSettings => self.ntp_settings = visibility,
            Section::ScheduleSettings => self.schedule_settings = visibility,
            Section::MqttSettings => self.mqtt_settings = visibility,
            Section::ResetControls => self.reset_controls = visibility,
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.get(section).is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SECTIONS: [Section; 5] = [
        Section::BrightnessSlider,
        Section::NtpSettings,
        Section::ScheduleSettings,
        Section::MqttSettings,
        Section::ResetControls,
    ];

    #[test]
    fn test_switch_on_reveals_section() {
        assert_eq!(
            ToggleKind::NtpUpdate.visibility(true),
            SectionVisibility::Visible
        );
        assert_eq!(
            ToggleKind::NtpUpdate.visibility(false),
            SectionVisibility::Hidden
        );
        assert_eq!(
            ToggleKind::HaIntegration.visibility(true),
            SectionVisibility::Visible
        );
        assert_eq!(
            ToggleKind::ResetConfirm.visibility(false),
            SectionVisibility::Hidden
        );
    }

    #[test]
    fn test_auto_brightness_polarity_is_inverted() {
        // The manual slider only shows while auto-brightness is off
        assert_eq!(
            ToggleKind::AutoBrightness.visibility(true),
            SectionVisibility::Hidden
        );
        assert_eq!(
            ToggleKind::AutoBrightness.visibility(false),
            SectionVisibility::Visible
        );
    }

    #[test]
    fn test_containerless_switches_have_no_section() {
        assert_eq!(ToggleKind::LightPower.section(), None);
        assert_eq!(ToggleKind::ClockFaceOption.section(), None);
    }

    #[test]
    fn test_transition_is_idempotent() {
        for kind in [
            ToggleKind::AutoBrightness,
            ToggleKind::NtpUpdate,
            ToggleKind::LightSchedule,
            ToggleKind::HaIntegration,
            ToggleKind::ResetConfirm,
        ] {
            for checked in [true, false] {
                assert_eq!(kind.visibility(checked), kind.visibility(checked));
            }
        }
    }

    #[test]
    fn test_set_leaves_other_sections_unchanged() {
        let mut map = SectionVisibilityMap::default();
        map.set(Section::NtpSettings, SectionVisibility::Visible);

        for section in ALL_SECTIONS {
            let expected = if section == Section::NtpSettings {
                SectionVisibility::Visible
            } else {
                SectionVisibility::Hidden
            };
            assert_eq!(map.get(section), expected);
        }
    }
}
