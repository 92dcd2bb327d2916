//! # Shared Data Types for the Pairing API
//!
//! Request bodies and typed response envelopes for each pairing endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// The `{"data": ...}` wrapper around every decoded response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// =============================================================================
// DEVICE REGISTRATION
// =============================================================================

/// Request to register a device in a realm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationRequest {
    /// Hardware ID of the device (its device ID)
    pub hw_id: String,

    /// Interfaces the device declares at registration.
    ///
    /// Forwarded as-is; the client does not interpret it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_introspection: Option<Map<String, Value>>,
}

impl RegistrationRequest {
    /// Create a plain registration request
    pub fn new(hw_id: impl Into<String>) -> Self {
        Self {
            hw_id: hw_id.into(),
            initial_introspection: None,
        }
    }

    /// Attach an initial introspection object
    pub fn with_initial_introspection(mut self, introspection: Map<String, Value>) -> Self {
        self.initial_introspection = Some(introspection);
        self
    }
}

/// Data returned by a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResult {
    /// Secret the device authenticates with on device-facing endpoints
    pub credentials_secret: String,
}

// =============================================================================
// DEVICE CERTIFICATE
// =============================================================================

/// Request to sign a device certificate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateRequest {
    /// PEM-encoded certificate signing request
    pub csr: String,
}

/// Data returned when a certificate is issued
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateResult {
    /// Signed client certificate
    pub client_crt: String,
}

// =============================================================================
// DEVICE PROTOCOL STATUS
// =============================================================================

/// Connectivity information for a device on Astarte MQTT v1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AstarteMqttV1ProtocolInfo {
    /// Broker the device should connect to (e.g. `ssl://broker:8883`)
    pub broker_url: String,

    /// Any other protocol fields returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Protocol entries of a device status response.
///
/// Entries for protocols other than Astarte MQTT v1 are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceProtocols {
    pub astarte_mqtt_v1: AstarteMqttV1ProtocolInfo,
}

/// Device status as returned by the device info endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceProtocolStatus {
    pub protocols: DeviceProtocols,
}
