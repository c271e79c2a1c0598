//! Outbound request construction for the device HTTP contract
//!
//! Every save operation builds exactly one [`SaveRequest`] from a validated
//! snapshot. Payload construction is pure so the wire contract can be tested
//! without a device.

use super::types::{ClockFace, HaIntegration, LightSchedule, NtpConfig};

/// How a request's parameters travel to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// GET with a query string
    Query,
    /// POST with a form-encoded body
    Form,
}

/// A fully built outbound configuration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub path: &'static str,
    pub encoding: Encoding,
    pub params: Vec<(&'static str, String)>,
}

fn flag(on: bool) -> String {
    if on { "1" } else { "0" }.to_string()
}

impl SaveRequest {
    pub fn toggle_light(on: bool) -> Self {
        Self {
            path: "/toggleLight",
            encoding: Encoding::Query,
            params: vec![("enabled", flag(on))],
        }
    }

    /// Color must already be validated as strict `#RRGGBB`
    pub fn set_light_color(color: &str) -> Self {
        Self {
            path: "/setLightColor",
            encoding: Encoding::Query,
            params: vec![("color", color.to_string())],
        }
    }

    pub fn set_auto_brightness(on: bool) -> Self {
        Self {
            path: "/setAutoBrightness",
            encoding: Encoding::Query,
            params: vec![("enabled", flag(on))],
        }
    }

    pub fn set_brightness(value: u8) -> Self {
        Self {
            path: "/setBrightness",
            encoding: Encoding::Query,
            params: vec![("value", value.to_string())],
        }
    }

    pub fn set_time(time: &str) -> Self {
        Self {
            path: "/setTime",
            encoding: Encoding::Form,
            params: vec![("time", time.to_string())],
        }
    }

    /// The host/interval/timezone fields travel only while NTP is enabled
    pub fn set_ntp_config(config: &NtpConfig) -> Self {
        let mut params = vec![("enabled", flag(config.enabled))];
        if config.enabled {
            params.push(("ntpHost", config.host.clone()));
            params.push(("ntpInterval", config.interval.to_string()));
            params.push(("ntpTimezone", config.timezone.clone()));
        }
        Self {
            path: "/setNTPConfig",
            encoding: Encoding::Form,
            params,
        }
    }

    pub fn set_light_schedule(schedule: &LightSchedule) -> Self {
        let mut params = vec![("enabled", flag(schedule.enabled))];
        if schedule.enabled {
            params.push(("scheduleStart", schedule.start.clone()));
            params.push(("scheduleEnd", schedule.end.clone()));
        }
        Self {
            path: "/setLightSchedule",
            encoding: Encoding::Form,
            params,
        }
    }

    pub fn set_clock_face(face: &ClockFace) -> Self {
        Self {
            path: "/setClockFace",
            encoding: Encoding::Form,
            params: vec![
                ("clockFace", face.face.clone()),
                ("option", flag(face.alternate_quarters)),
            ],
        }
    }

    /// Username travels only when set, the password only alongside a
    /// username, the topic only when non-empty
    pub fn set_ha_integration(config: &HaIntegration) -> Self {
        let mut params = vec![("enabled", flag(config.enabled))];
        if config.enabled {
            params.push(("mqttHost", config.host.clone()));
            params.push(("mqttPort", config.port.to_string()));
            if !config.username.is_empty() {
                params.push(("mqttUsername", config.username.clone()));
                if !config.password.is_empty() {
                    params.push(("mqttPassword", config.password.clone()));
                }
            }
            if !config.topic.is_empty() {
                params.push(("mqttTopic", config.topic.clone()));
            }
        }
        Self {
            path: "/setHaIntegration",
            encoding: Encoding::Form,
            params,
        }
    }

    /// Factory reset, empty body
    pub fn reset_config() -> Self {
        Self {
            path: "/resetConfig",
            encoding: Encoding::Form,
            params: Vec::new(),
        }
    }

    #[cfg(test)]
    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_light_uses_enabled_flag() {
        let on = SaveRequest::toggle_light(true);
        assert_eq!(on.path, "/toggleLight");
        assert_eq!(on.encoding, Encoding::Query);
        assert_eq!(on.param("enabled"), Some("1"));

        let off = SaveRequest::toggle_light(false);
        assert_eq!(off.param("enabled"), Some("0"));
    }

    #[test]
    fn test_brightness_value_travels_as_query() {
        let request = SaveRequest::set_brightness(128);
        assert_eq!(request.path, "/setBrightness");
        assert_eq!(request.encoding, Encoding::Query);
        assert_eq!(request.param("value"), Some("128"));
    }

    #[test]
    fn test_time_travels_as_form_body() {
        let request = SaveRequest::set_time("12:30");
        assert_eq!(request.path, "/setTime");
        assert_eq!(request.encoding, Encoding::Form);
        assert_eq!(request.param("time"), Some("12:30"));
    }

    #[test]
    fn test_ntp_disabled_sends_only_flag() {
        let config = NtpConfig {
            enabled: false,
            host: "0.pool.ntp.org".to_string(),
            interval: 60,
            timezone: "Etc/UTC".to_string(),
        };
        let request = SaveRequest::set_ntp_config(&config);
        assert_eq!(request.params, vec![("enabled", "0".to_string())]);
    }

    #[test]
    fn test_ntp_enabled_sends_full_config() {
        let config = NtpConfig {
            enabled: true,
            host: "0.pool.ntp.org".to_string(),
            interval: 60,
            timezone: "Europe/Berlin".to_string(),
        };
        let request = SaveRequest::set_ntp_config(&config);
        assert_eq!(request.param("enabled"), Some("1"));
        assert_eq!(request.param("ntpHost"), Some("0.pool.ntp.org"));
        assert_eq!(request.param("ntpInterval"), Some("60"));
        assert_eq!(request.param("ntpTimezone"), Some("Europe/Berlin"));
    }

    #[test]
    fn test_schedule_disabled_omits_times() {
        let schedule = LightSchedule {
            enabled: false,
            start: "22:00".to_string(),
            end: "06:00".to_string(),
        };
        let request = SaveRequest::set_light_schedule(&schedule);
        assert_eq!(request.params, vec![("enabled", "0".to_string())]);
    }

    #[test]
    fn test_ha_password_requires_username() {
        let config = HaIntegration {
            enabled: true,
            host: "192.168.1.10".to_string(),
            port: 1883,
            username: String::new(),
            password: "secret".to_string(),
            topic: "woc".to_string(),
        };
        let request = SaveRequest::set_ha_integration(&config);
        assert_eq!(request.param("mqttUsername"), None);
        assert_eq!(request.param("mqttPassword"), None);
        assert_eq!(request.param("mqttTopic"), Some("woc"));
    }

    #[test]
    fn test_ha_credentials_travel_together() {
        let config = HaIntegration {
            enabled: true,
            host: "192.168.1.10".to_string(),
            port: 1883,
            username: "woc".to_string(),
            password: "secret".to_string(),
            topic: "woc".to_string(),
        };
        let request = SaveRequest::set_ha_integration(&config);
        assert_eq!(request.param("mqttUsername"), Some("woc"));
        assert_eq!(request.param("mqttPassword"), Some("secret"));
    }

    #[test]
    fn test_ha_disabled_sends_only_flag() {
        let config = HaIntegration {
            enabled: false,
            host: "192.168.1.10".to_string(),
            port: 1883,
            username: "woc".to_string(),
            password: "secret".to_string(),
            topic: "woc".to_string(),
        };
        let request = SaveRequest::set_ha_integration(&config);
        assert_eq!(request.params, vec![("enabled", "0".to_string())]);
    }

    #[test]
    fn test_reset_has_empty_body() {
        let request = SaveRequest::reset_config();
        assert_eq!(request.path, "/resetConfig");
        assert_eq!(request.encoding, Encoding::Form);
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_clock_face_option_flag() {
        let face = ClockFace {
            face: "de-DE".to_string(),
            alternate_quarters: true,
        };
        let request = SaveRequest::set_clock_face(&face);
        assert_eq!(request.param("clockFace"), Some("de-DE"));
        assert_eq!(request.param("option"), Some("1"));
    }
}
