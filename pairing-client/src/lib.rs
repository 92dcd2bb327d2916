//! # Pairing API Client
//!
//! This crate provides client-side access to the device pairing API:
//! - Device registration and unregistration (realm token)
//! - Astarte MQTT v1 certificate issuance (device credentials secret)
//! - Astarte MQTT v1 protocol info (device credentials secret)
//!
//! ## Transport
//!
//! HTTP is delegated to an [`HttpTransport`]. [`ReqwestTransport`] is the
//! default; tests and embedders can inject their own.
//!
//! ```no_run
//! # async fn run() -> shared::PairingResult<()> {
//! use pairing_client::PairingClient;
//! use shared::PairingClientConfig;
//!
//! let client = PairingClient::new(&PairingClientConfig::new("https://api.example.com/pairing"))?;
//! let secret = client.register_device("test", "2TBn-jNESuuHamE2Zo1anA", "realm-jwt").await?;
//! let broker = client.get_protocol_info("test", "2TBn-jNESuuHamE2Zo1anA", &secret).await?.broker_url;
//! # let _ = broker;
//! # Ok(())
//! # }
//! ```

pub mod pairing;
pub mod transport;

// Re-export commonly used types
pub use pairing::PairingClient;
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
