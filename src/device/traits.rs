//! Trait abstraction for the device client to enable mocking in tests

use super::client::{DeviceClient, TransportError};
use super::request::SaveRequest;
use super::types::Ack;
use async_trait::async_trait;

/// Trait for device client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceClientTrait: Send + Sync {
    /// Send one configuration request and return the device acknowledgement
    async fn submit(&self, request: SaveRequest) -> Result<Ack, TransportError>;

    /// Fetch the device's current wall time
    async fn current_time(&self) -> Result<String, TransportError>;

    /// The device base address, for display
    fn address(&self) -> &str;
}

#[async_trait]
impl DeviceClientTrait for DeviceClient {
    async fn submit(&self, request: SaveRequest) -> Result<Ack, TransportError> {
        DeviceClient::submit(self, request).await
    }

    async fn current_time(&self) -> Result<String, TransportError> {
        DeviceClient::current_time(self).await
    }

    fn address(&self) -> &str {
        DeviceClient::address(self)
    }
}
