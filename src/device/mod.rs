//! Device client module for HTTP communication with the word clock

mod client;
mod request;
mod traits;
mod types;

pub use client::DeviceClient;
pub use request::SaveRequest;
pub use traits::DeviceClientTrait;
pub use types::{ClockFace, HaIntegration, LightSchedule, NtpConfig};

#[cfg(test)]
pub use request::Encoding;
#[cfg(test)]
pub use traits::MockDeviceClientTrait;
