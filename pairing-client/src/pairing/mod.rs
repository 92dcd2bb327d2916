//! # Pairing Client
//!
//! Stateless client for the pairing API:
//! 1. Register or unregister a device in a realm (realm token)
//! 2. Obtain an Astarte MQTT v1 client certificate (device secret)
//! 3. Query Astarte MQTT v1 connectivity info (device secret)
//!
//! The client holds only the base URL and the shared transport, so it can
//! be cloned freely and used from many tasks at once.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use shared::{
    config::PairingClientConfig,
    constants::*,
    error::{PairingError, PairingResult},
    types::{
        AstarteMqttV1ProtocolInfo, CertificateRequest, CertificateResult, DataEnvelope,
        DeviceProtocolStatus, RegistrationRequest, RegistrationResult,
    },
};

use crate::transport::{self, HttpTransport, ReqwestTransport};

/// API client for the pairing service
#[derive(Clone)]
pub struct PairingClient {
    /// Pairing service origin, possibly with a path prefix
    pairing_url: Url,

    /// Shared HTTP transport
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for PairingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairingClient")
            .field("pairing_url", &self.pairing_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PairingClient {
    /// Create a client using the reqwest transport
    pub fn new(config: &PairingClientConfig) -> PairingResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Self::with_transport(config.base_url()?, Arc::new(transport))
    }

    /// Create a client on top of any transport
    pub fn with_transport(
        pairing_url: Url,
        transport: Arc<dyn HttpTransport>,
    ) -> PairingResult<Self> {
        if pairing_url.cannot_be_a_base() {
            return Err(PairingError::InvalidUrl(format!(
                "'{}' cannot be used as a base URL",
                pairing_url
            )));
        }

        Ok(Self {
            pairing_url,
            transport,
        })
    }

    /// Base URL every endpoint is built under
    pub fn pairing_url(&self) -> &Url {
        &self.pairing_url
    }

    /// Register a device into the realm.
    ///
    /// Returns the credentials secret of the device.
    pub async fn register_device(
        &self,
        realm: &str,
        device_id: &str,
        token: &str,
    ) -> PairingResult<String> {
        self.register_device_with(realm, &RegistrationRequest::new(device_id), token)
            .await
    }

    /// Register a device using a caller-built request
    pub async fn register_device_with(
        &self,
        realm: &str,
        request: &RegistrationRequest,
        token: &str,
    ) -> PairingResult<String> {
        require("device id", &request.hw_id)?;
        let url = self.endpoint(realm, &AGENT_DEVICES_SEGMENTS)?;

        debug!(
            realm = %realm,
            device_id = %request.hw_id,
            introspection = request.initial_introspection.is_some(),
            "Registering device"
        );

        let response: DataEnvelope<RegistrationResult> = transport::post_json_with_response(
            self.transport.as_ref(),
            url,
            request,
            token,
            STATUS_REGISTER_DEVICE,
        )
        .await?;

        Ok(response.data.credentials_secret)
    }

    /// Reset the registration state of a device so it can register again.
    ///
    /// Data belonging to the device is left untouched by the service.
    pub async fn unregister_device(
        &self,
        realm: &str,
        device_id: &str,
        token: &str,
    ) -> PairingResult<()> {
        require("device id", device_id)?;
        let url = self.endpoint(
            realm,
            &[AGENT_DEVICES_SEGMENTS[0], AGENT_DEVICES_SEGMENTS[1], device_id],
        )?;

        debug!(realm = %realm, device_id = %device_id, "Unregistering device");

        transport::delete(self.transport.as_ref(), url, token, STATUS_UNREGISTER_DEVICE).await
    }

    /// Obtain a client certificate for a device on Astarte MQTT v1.
    ///
    /// Authenticates with the device's credentials secret, not a realm token.
    pub async fn obtain_certificate(
        &self,
        realm: &str,
        device_id: &str,
        credentials_secret: &str,
        csr: &str,
    ) -> PairingResult<String> {
        require("device id", device_id)?;
        let url = self.endpoint(
            realm,
            &[
                DEVICES_SEGMENT,
                device_id,
                PROTOCOLS_SEGMENT,
                PROTOCOL_ASTARTE_MQTT_V1,
                CREDENTIALS_SEGMENT,
            ],
        )?;

        debug!(realm = %realm, device_id = %device_id, "Requesting device certificate");

        let request = CertificateRequest { csr: csr.to_string() };
        let response: DataEnvelope<CertificateResult> = transport::post_json_with_response(
            self.transport.as_ref(),
            url,
            &request,
            credentials_secret,
            STATUS_OBTAIN_CERTIFICATE,
        )
        .await?;

        Ok(response.data.client_crt)
    }

    /// Get Astarte MQTT v1 connectivity info (broker URL, ...) for a device
    pub async fn get_protocol_info(
        &self,
        realm: &str,
        device_id: &str,
        credentials_secret: &str,
    ) -> PairingResult<AstarteMqttV1ProtocolInfo> {
        require("device id", device_id)?;
        let url = self.endpoint(realm, &[DEVICES_SEGMENT, device_id])?;

        debug!(realm = %realm, device_id = %device_id, "Fetching protocol info");

        let response: DataEnvelope<DeviceProtocolStatus> = transport::get_json(
            self.transport.as_ref(),
            url,
            credentials_secret,
            STATUS_GET_PROTOCOL_INFO,
        )
        .await?;

        Ok(response.data.protocols.astarte_mqtt_v1)
    }

    /// Build `<pairing_url>/v1/{realm}/{segments...}`
    fn endpoint(&self, realm: &str, segments: &[&str]) -> PairingResult<Url> {
        require("realm", realm)?;

        let mut url = self.pairing_url.clone();
        url.path_segments_mut()
            .map_err(|_| PairingError::InvalidUrl(self.pairing_url.to_string()))?
            .pop_if_empty()
            .push(API_VERSION)
            .push(realm)
            .extend(segments);

        Ok(url)
    }
}

fn require(what: &str, value: &str) -> PairingResult<()> {
    if value.trim().is_empty() {
        return Err(PairingError::InvalidRequest(format!("{} must not be empty", what)));
    }
    // Dot segments would be resolved away by the URL path
    if value == "." || value == ".." {
        return Err(PairingError::InvalidRequest(format!(
            "{} must not be '{}'",
            what, value
        )));
    }
    Ok(())
}
