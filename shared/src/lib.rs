//! # Shared Module for the Pairing API Client
//!
//! This crate provides the data model, error type, configuration and
//! constants used by the pairing client.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Success |
//! |-----------|--------|------|---------|
//! | Register device | POST | `/v1/{realm}/agent/devices` | 201 |
//! | Unregister device | DELETE | `/v1/{realm}/agent/devices/{device_id}` | 204 |
//! | Obtain certificate | POST | `/v1/{realm}/devices/{device_id}/protocols/astarte_mqtt_v1/credentials` | 201 |
//! | Get protocol info | GET | `/v1/{realm}/devices/{device_id}` | 200 |

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::*;
pub use constants::*;
pub use error::*;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
