//! Application state definitions

use super::forms::{LightForm, SystemForm, TimeForm};
use super::toggles::{SectionVisibilityMap, ToggleKind};
use serde::{Deserialize, Serialize};

/// Current view, one per device configuration page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Light,
    Time,
    System,
}

impl View {
    pub const ALL: [View; 3] = [View::Light, View::Time, View::System];

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Time => "Time",
            Self::System => "System",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Time => 1,
            Self::System => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Time,
            Self::Time => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Light => Self::System,
            Self::Time => Self::Light,
            Self::System => Self::Time,
        }
    }
}

/// Persisted theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[allow(dead_code)]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Appearance
    pub theme: Theme,

    // Form state, one form per view
    pub light_form: LightForm,
    pub time_form: TimeForm,
    pub system_form: SystemForm,

    // Dependent-section visibility
    pub visibility: SectionVisibilityMap,

    // Blocking validation alert
    pub alert: Option<String>,

    // Reset confirmation dialog
    pub reset_confirm_open: bool,
}

impl AppState {
    /// Current state of every switch that controls a dependent section
    pub fn bound_switches(&self) -> [(ToggleKind, bool); 5] {
        [
            (
                ToggleKind::AutoBrightness,
                self.light_form.auto_brightness.is_on(),
            ),
            (ToggleKind::NtpUpdate, self.time_form.ntp_enabled.is_on()),
            (
                ToggleKind::LightSchedule,
                self.time_form.schedule_enabled.is_on(),
            ),
            (
                ToggleKind::HaIntegration,
                self.system_form.ha_enabled.is_on(),
            ),
            (
                ToggleKind::ResetConfirm,
                self.system_form.reset_armed.is_on(),
            ),
        ]
    }

    /// Derive all section visibility from current switch state.
    ///
    /// Applies the same transition function a user toggle would, once per
    /// binding. Pure state only; callers decide whether saves may fire.
    pub fn initialize_visibility(&mut self) {
        for (kind, checked) in self.bound_switches() {
            if let Some(section) = kind.section() {
                self.visibility.set(section, kind.visibility(checked));
            }
        }
    }
}
