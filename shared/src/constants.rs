//! # Constants for the Pairing API Client
//!
//! Endpoint paths, expected status codes, defaults and environment
//! variable names used by the client and the CLI.

// =============================================================================
// API PATHS
// =============================================================================

/// API version prefix
pub const API_VERSION: &str = "v1";

/// Path segments after the realm for agent (realm-token) device operations
pub const AGENT_DEVICES_SEGMENTS: [&str; 2] = ["agent", "devices"];

/// Path segment after the realm for device-facing operations
pub const DEVICES_SEGMENT: &str = "devices";

/// Path segment introducing a protocol name
pub const PROTOCOLS_SEGMENT: &str = "protocols";

/// Path segment for the credentials endpoint of a protocol
pub const CREDENTIALS_SEGMENT: &str = "credentials";

/// Protocol name for Astarte MQTT v1
pub const PROTOCOL_ASTARTE_MQTT_V1: &str = "astarte_mqtt_v1";

// =============================================================================
// EXPECTED STATUS CODES
// =============================================================================

/// Device registered
pub const STATUS_REGISTER_DEVICE: u16 = 201;

/// Device registration reset
pub const STATUS_UNREGISTER_DEVICE: u16 = 204;

/// Certificate issued
pub const STATUS_OBTAIN_CERTIFICATE: u16 = 201;

/// Device status returned
pub const STATUS_GET_PROTOCOL_INFO: u16 = 200;

// =============================================================================
// CLIENT DEFAULTS
// =============================================================================

/// Default pairing service origin (local development)
pub const DEFAULT_PAIRING_URL: &str = "http://localhost:4003";

/// Default total request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("pairing-client/", env!("CARGO_PKG_VERSION"));

/// Maximum number of response body bytes kept in an unexpected-status error
pub const MAX_ERROR_BODY_LEN: usize = 512;

// =============================================================================
// ENVIRONMENT VARIABLE NAMES
// =============================================================================

/// Environment variable for the pairing service URL
pub const ENV_PAIRING_URL: &str = "PAIRING_URL";

/// Environment variable for the request timeout
pub const ENV_PAIRING_TIMEOUT_SECS: &str = "PAIRING_TIMEOUT_SECS";

/// Environment variable for the connect timeout
pub const ENV_PAIRING_CONNECT_TIMEOUT_SECS: &str = "PAIRING_CONNECT_TIMEOUT_SECS";

/// Environment variable for the realm token (agent operations)
pub const ENV_PAIRING_TOKEN: &str = "PAIRING_TOKEN";

/// Environment variable for the device credentials secret
pub const ENV_PAIRING_CREDENTIALS_SECRET: &str = "PAIRING_CREDENTIALS_SECRET";
