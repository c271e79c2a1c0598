//! Application core: the settings form controller
//!
//! Maps every user control to at most one outbound configuration request,
//! validates snapshots before dispatch, and keeps dependent-section
//! visibility in sync with the switches that own them.

use crate::config::TuiConfig;
use crate::device::{DeviceClient, DeviceClientTrait, SaveRequest};
use crate::state::{
    AppState, FieldValue, Form, FormField, SettingsGroup, ToggleKind, ToggleOrigin, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Persisted user preferences
    pub config: TuiConfig,
    /// Client for the device's HTTP interface
    device: Arc<dyn DeviceClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance against the real device
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let device = Arc::new(DeviceClient::new(config.device_address.clone()));
        Ok(Self::with_device(config, device).await)
    }

    /// Create an App over any device client implementation
    pub async fn with_device(config: TuiConfig, device: Arc<dyn DeviceClientTrait>) -> Self {
        let mut state = AppState {
            theme: config.theme(),
            ..AppState::default()
        };

        // Apply each switch's transition once so sections match their
        // switches, without firing any save.
        state.initialize_visibility();

        // Prefill the manual time field; it stays empty if the device is
        // unreachable.
        match device.current_time().await {
            Ok(time) => state.time_form.time.set_text(time),
            Err(err) => tracing::debug!(error = %err, "could not fetch current time"),
        }

        Self {
            state,
            config,
            device,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Device base address, for the status bar
    pub fn device_address(&self) -> &str {
        self.device.address()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // A validation alert blocks everything until dismissed
        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.alert = None;
            }
            return Ok(());
        }

        // Reset confirmation dialog
        if self.state.reset_confirm_open {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    if let Some(request) = self.confirm_reset(true) {
                        self.dispatch("configuration reset", request);
                    }
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    self.confirm_reset(false);
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_theme();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Left => self.state.current_view = self.state.current_view.prev(),
            KeyCode::Right => self.state.current_view = self.state.current_view.next(),
            KeyCode::Tab => self.next_field(),
            KeyCode::BackTab => self.prev_field(),
            KeyCode::Enter => self.save_active_group(),
            KeyCode::Backspace => self.active_field_mut().pop_char(),
            KeyCode::Char(' ') => self.space_pressed(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.active_field_mut().push_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply a switch transition.
    ///
    /// Visibility of the bound section is a pure function of the switch
    /// state, identical for both origins. Saves fire only for user-driven
    /// transitions: the light and auto-brightness switches save on every
    /// change, NTP and schedule persist their disabled state when switched
    /// off.
    pub fn apply_toggle(&mut self, kind: ToggleKind, checked: bool, origin: ToggleOrigin) {
        if let Some(section) = kind.section() {
            self.state.visibility.set(section, kind.visibility(checked));
        }

        if origin == ToggleOrigin::Initializing {
            return;
        }

        match kind {
            ToggleKind::LightPower => {
                self.dispatch("light toggle", SaveRequest::toggle_light(checked));
            }
            ToggleKind::AutoBrightness => {
                self.dispatch("auto-brightness", SaveRequest::set_auto_brightness(checked));
            }
            ToggleKind::NtpUpdate if !checked => self.save_group(SettingsGroup::Ntp),
            ToggleKind::LightSchedule if !checked => self.save_group(SettingsGroup::Schedule),
            _ => {}
        }
    }

    /// Save the group the active field belongs to
    pub fn save_active_group(&mut self) {
        let index = self.active_index();
        let group = match self.state.current_view {
            View::Light => self.state.light_form.group(index),
            View::Time => self.state.time_form.group(index),
            View::System => self.state.system_form.group(index),
        };
        if let Some(group) = group {
            self.save_group(group);
        }
    }

    /// Run one save operation: snapshot, validate, dispatch.
    ///
    /// The reset group opens the confirmation dialog instead; the request
    /// only leaves through [`App::confirm_reset`].
    pub fn save_group(&mut self, group: SettingsGroup) {
        if group == SettingsGroup::Reset {
            self.state.reset_confirm_open = true;
            return;
        }
        if let Some(request) = self.build_save_request(group) {
            self.dispatch(group_label(group), request);
        }
    }

    /// Snapshot and validate a settings group, building its one outbound
    /// request. A rejected snapshot raises the blocking alert and yields
    /// nothing, leaving no side effects.
    pub fn build_save_request(&mut self, group: SettingsGroup) -> Option<SaveRequest> {
        let built = match group {
            SettingsGroup::LightColor => self
                .state
                .light_form
                .color_snapshot()
                .map(SaveRequest::set_light_color),
            SettingsGroup::Brightness => self
                .state
                .light_form
                .brightness_snapshot()
                .map(SaveRequest::set_brightness),
            SettingsGroup::Time => self
                .state
                .time_form
                .time_snapshot()
                .map(SaveRequest::set_time),
            SettingsGroup::Ntp => self
                .state
                .time_form
                .ntp_snapshot()
                .map(|config| SaveRequest::set_ntp_config(&config)),
            SettingsGroup::Schedule => self
                .state
                .time_form
                .schedule_snapshot()
                .map(|schedule| SaveRequest::set_light_schedule(&schedule)),
            SettingsGroup::ClockFace => Ok(SaveRequest::set_clock_face(
                &self.state.system_form.clock_face_snapshot(),
            )),
            SettingsGroup::HaIntegration => self
                .state
                .system_form
                .ha_snapshot()
                .map(|config| SaveRequest::set_ha_integration(&config)),
            SettingsGroup::Reset => Ok(SaveRequest::reset_config()),
        };

        match built {
            Ok(request) => Some(request),
            Err(err) => {
                self.state.alert = Some(err.to_string());
                None
            }
        }
    }

    /// Close the reset confirmation dialog. Accepting yields the single
    /// reset request; declining sends nothing.
    pub fn confirm_reset(&mut self, accepted: bool) -> Option<SaveRequest> {
        self.state.reset_confirm_open = false;
        accepted.then(SaveRequest::reset_config)
    }

    /// Flip the theme, re-apply it and persist the preference
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.config.theme = Some(self.state.theme);
        if let Err(err) = self.config.save() {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }

    /// Fire-and-forget dispatch of one request; the acknowledgement or the
    /// failure is logged, never displayed.
    fn dispatch(&self, label: &'static str, request: SaveRequest) {
        let device = Arc::clone(&self.device);
        tokio::spawn(async move {
            match device.submit(request).await {
                Ok(ack) => tracing::info!(%ack, "{} saved", label),
                Err(err) => tracing::error!(error = %err, "{} save failed", label),
            }
        });
    }

    fn space_pressed(&mut self) {
        let index = self.active_index();
        let kind = match self.state.current_view {
            View::Light => self.state.light_form.toggle_kind(index),
            View::Time => self.state.time_form.toggle_kind(index),
            View::System => self.state.system_form.toggle_kind(index),
        };

        if let Some(kind) = kind {
            let checked = self.active_field_mut().flip();
            self.apply_toggle(kind, checked, ToggleOrigin::UserDriven);
        } else {
            let field = self.active_field_mut();
            if matches!(field.value, FieldValue::Select { .. }) {
                field.cycle();
            } else {
                field.push_char(' ');
            }
        }
    }

    fn active_index(&self) -> usize {
        match self.state.current_view {
            View::Light => self.state.light_form.active_field(),
            View::Time => self.state.time_form.active_field(),
            View::System => self.state.system_form.active_field(),
        }
    }

    fn active_field_mut(&mut self) -> &mut FormField {
        match self.state.current_view {
            View::Light => self.state.light_form.get_active_field_mut(),
            View::Time => self.state.time_form.get_active_field_mut(),
            View::System => self.state.system_form.get_active_field_mut(),
        }
    }

    fn next_field(&mut self) {
        let visibility = self.state.visibility;
        match self.state.current_view {
            View::Light => self.state.light_form.next_field(&visibility),
            View::Time => self.state.time_form.next_field(&visibility),
            View::System => self.state.system_form.next_field(&visibility),
        }
    }

    fn prev_field(&mut self) {
        let visibility = self.state.visibility;
        match self.state.current_view {
            View::Light => self.state.light_form.prev_field(&visibility),
            View::Time => self.state.time_form.prev_field(&visibility),
            View::System => self.state.system_form.prev_field(&visibility),
        }
    }
}

fn group_label(group: SettingsGroup) -> &'static str {
    match group {
        SettingsGroup::LightColor => "light color",
        SettingsGroup::Brightness => "brightness",
        SettingsGroup::Time => "time",
        SettingsGroup::Ntp => "NTP configuration",
        SettingsGroup::Schedule => "light schedule",
        SettingsGroup::ClockFace => "clock face",
        SettingsGroup::HaIntegration => "HomeAssistant integration",
        SettingsGroup::Reset => "configuration reset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Encoding, MockDeviceClientTrait};
    use crate::state::{Section, SystemForm};
    use crossterm::event::KeyEvent;

    async fn test_app() -> App {
        let mut device = MockDeviceClientTrait::new();
        device
            .expect_current_time()
            .return_once(|| Ok("12:30".to_string()));
        App::with_device(TuiConfig::default(), Arc::new(device)).await
    }

    /// Mock that fails the test if any request is submitted
    async fn silent_app() -> App {
        let mut device = MockDeviceClientTrait::new();
        device
            .expect_current_time()
            .return_once(|| Ok("12:30".to_string()));
        device.expect_submit().never();
        App::with_device(TuiConfig::default(), Arc::new(device)).await
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[tokio::test]
    async fn test_startup_prefills_time_from_device() {
        let app = test_app().await;
        assert_eq!(app.state.time_form.time.as_text(), "12:30");
    }

    #[tokio::test]
    async fn test_startup_applies_visibility_without_requests() {
        let app = silent_app().await;
        // NTP defaults on, so its section is visible right away
        assert!(app.state.visibility.is_visible(Section::NtpSettings));
        // auto-brightness defaults on, so the manual slider is hidden
        assert!(!app.state.visibility.is_visible(Section::BrightnessSlider));
    }

    #[tokio::test]
    async fn test_initializing_toggle_never_dispatches() {
        let mut app = silent_app().await;
        app.apply_toggle(ToggleKind::NtpUpdate, true, ToggleOrigin::Initializing);
        app.apply_toggle(ToggleKind::LightSchedule, false, ToggleOrigin::Initializing);
        app.apply_toggle(ToggleKind::AutoBrightness, true, ToggleOrigin::Initializing);
        assert!(app.state.visibility.is_visible(Section::NtpSettings));
    }

    #[tokio::test]
    async fn test_user_toggle_updates_only_its_section() {
        let mut app = silent_app().await;
        let before = app.state.visibility;

        app.apply_toggle(ToggleKind::HaIntegration, true, ToggleOrigin::UserDriven);

        assert!(app.state.visibility.is_visible(Section::MqttSettings));
        assert_eq!(
            app.state.visibility.get(Section::NtpSettings),
            before.get(Section::NtpSettings)
        );
        assert_eq!(
            app.state.visibility.get(Section::BrightnessSlider),
            before.get(Section::BrightnessSlider)
        );
        assert_eq!(
            app.state.visibility.get(Section::ResetControls),
            before.get(Section::ResetControls)
        );
    }

    #[tokio::test]
    async fn test_invalid_color_raises_alert_and_builds_nothing() {
        let mut app = silent_app().await;
        app.state.light_form.color.set_text("cornflower".to_string());

        assert!(app.build_save_request(SettingsGroup::LightColor).is_none());
        assert_eq!(app.state.alert.as_deref(), Some("Invalid color format."));
    }

    #[tokio::test]
    async fn test_invalid_brightness_is_rejected() {
        let mut app = silent_app().await;
        app.state.light_form.brightness.set_text("300".to_string());

        assert!(app.build_save_request(SettingsGroup::Brightness).is_none());
        assert!(app.state.alert.is_some());
    }

    #[tokio::test]
    async fn test_valid_color_builds_one_query_request() {
        let mut app = silent_app().await;
        let request = app.build_save_request(SettingsGroup::LightColor).unwrap();
        assert_eq!(request.path, "/setLightColor");
        assert_eq!(request.encoding, Encoding::Query);
        assert_eq!(request.params, vec![("color", "#FFFFFF".to_string())]);
        assert!(app.state.alert.is_none());
    }

    #[tokio::test]
    async fn test_ntp_switched_off_persists_disabled_state() {
        let mut app = silent_app().await;
        app.state.time_form.ntp_enabled.set_on(false);

        let request = app.build_save_request(SettingsGroup::Ntp).unwrap();
        assert_eq!(request.path, "/setNTPConfig");
        assert_eq!(request.params, vec![("enabled", "0".to_string())]);
    }

    #[tokio::test]
    async fn test_enter_on_reset_button_opens_dialog_without_request() {
        let mut app = silent_app().await;
        app.state.current_view = View::System;
        app.state.system_form.reset_armed.set_on(true);
        app.state.initialize_visibility();
        app.state
            .system_form
            .set_active_field(SystemForm::RESET_BUTTON_INDEX);

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.state.reset_confirm_open);
    }

    #[tokio::test]
    async fn test_reset_declined_sends_nothing() {
        let mut app = silent_app().await;
        app.state.reset_confirm_open = true;

        assert!(app.confirm_reset(false).is_none());
        assert!(!app.state.reset_confirm_open);
    }

    #[tokio::test]
    async fn test_reset_accepted_yields_exactly_one_request() {
        let mut app = silent_app().await;
        app.state.reset_confirm_open = true;

        let request = app.confirm_reset(true).unwrap();
        assert_eq!(request.path, "/resetConfig");
        assert!(request.params.is_empty());
        assert!(!app.state.reset_confirm_open);
    }

    #[tokio::test]
    async fn test_alert_blocks_input_until_dismissed() {
        let mut app = silent_app().await;
        app.state.alert = Some("Invalid color format.".to_string());

        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.light_form.active_field(), 0);

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.state.alert.is_none());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_theme_toggle_updates_state_and_config() {
        let mut app = test_app().await;
        assert_eq!(app.state.theme, crate::state::Theme::Light);

        app.state.theme = app.state.theme.toggle();
        app.config.theme = Some(app.state.theme);

        assert_eq!(app.config.theme, Some(crate::state::Theme::Dark));
        assert!(app.state.theme.is_dark());
    }

    #[tokio::test]
    async fn test_persisted_dark_theme_applies_on_startup() {
        let mut device = MockDeviceClientTrait::new();
        device
            .expect_current_time()
            .return_once(|| Ok("12:30".to_string()));
        let config = TuiConfig {
            theme: Some(crate::state::Theme::Dark),
            ..Default::default()
        };

        let app = App::with_device(config, Arc::new(device)).await;
        assert!(app.state.theme.is_dark());
    }

    #[tokio::test]
    async fn test_typing_edits_active_text_field() {
        let mut app = test_app().await;
        app.state.light_form.set_active_field(1);
        app.state.light_form.color.set_text(String::new());

        for c in "#00FF00".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.state.light_form.color.as_text(), "#00FF00");

        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.state.light_form.color.as_text(), "#00FF0");
    }

    #[tokio::test]
    async fn test_tab_skips_hidden_sections() {
        let mut app = test_app().await;
        // auto-brightness on by default: slider hidden
        app.state.light_form.set_active_field(2);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.light_form.active_field(), 0);
    }

    #[tokio::test]
    async fn test_view_navigation() {
        let mut app = test_app().await;
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.state.current_view, View::Time);
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.state.current_view, View::Light);
    }
}
