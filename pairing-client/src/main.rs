//! # Pairing Client CLI
//!
//! Command-line tool for pairing API operations:
//! - Register / unregister a device in a realm
//! - Obtain an Astarte MQTT v1 client certificate
//! - Show Astarte MQTT v1 protocol info
//!
//! ## Usage
//!
//! ```bash
//! # Register a device (realm token from PAIRING_TOKEN)
//! pairing-client --pairing-url https://api.example.com/pairing register --realm test --device-id <id>
//!
//! # Obtain a certificate (device secret from PAIRING_CREDENTIALS_SECRET)
//! pairing-client obtain-certificate --realm test --device-id <id> --csr-file device.csr
//!
//! # Show the broker URL
//! pairing-client protocol-info --realm test --device-id <id>
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pairing_client::PairingClient;
use shared::{
    config::PairingClientConfig,
    constants::{ENV_PAIRING_CREDENTIALS_SECRET, ENV_PAIRING_TOKEN},
};

#[derive(Parser)]
#[command(name = "pairing-client")]
#[command(about = "Client for the device pairing API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pairing service URL (overrides PAIRING_URL)
    #[arg(long)]
    pairing_url: Option<String>,

    /// Request timeout in seconds (overrides PAIRING_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Args)]
struct DeviceArgs {
    /// Realm the device belongs to
    #[arg(long, short = 'r')]
    realm: String,

    /// Device ID
    #[arg(long, short = 'd')]
    device_id: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a device and print its credentials secret
    Register {
        #[command(flatten)]
        device: DeviceArgs,

        /// Realm token
        #[arg(long, env = ENV_PAIRING_TOKEN, hide_env_values = true)]
        token: String,
    },

    /// Reset the registration of a device
    Unregister {
        #[command(flatten)]
        device: DeviceArgs,

        /// Realm token
        #[arg(long, env = ENV_PAIRING_TOKEN, hide_env_values = true)]
        token: String,
    },

    /// Obtain an Astarte MQTT v1 client certificate from a CSR
    ObtainCertificate {
        #[command(flatten)]
        device: DeviceArgs,

        /// Device credentials secret
        #[arg(long, env = ENV_PAIRING_CREDENTIALS_SECRET, hide_env_values = true)]
        secret: String,

        /// Path to the PEM-encoded certificate signing request
        #[arg(long)]
        csr_file: PathBuf,
    },

    /// Show Astarte MQTT v1 protocol info for a device
    ProtocolInfo {
        #[command(flatten)]
        device: DeviceArgs,

        /// Device credentials secret
        #[arg(long, env = ENV_PAIRING_CREDENTIALS_SECRET, hide_env_values = true)]
        secret: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    // Build config: environment first, flags on top
    let config = PairingClientConfig::from_env()
        .context("Invalid pairing environment")?
        .with_overrides(cli.pairing_url, cli.timeout_secs);

    let client = PairingClient::new(&config).context("Invalid pairing client configuration")?;
    info!(pairing_url = %client.pairing_url(), "Pairing client ready");

    match cli.command {
        Commands::Register { device, token } => {
            let secret = client
                .register_device(&device.realm, &device.device_id, &token)
                .await
                .context("Device registration failed")?;

            println!("{}", secret);
        }
        Commands::Unregister { device, token } => {
            client
                .unregister_device(&device.realm, &device.device_id, &token)
                .await
                .context("Device unregistration failed")?;

            info!(device_id = %device.device_id, "Device registration reset");
        }
        Commands::ObtainCertificate { device, secret, csr_file } => {
            let csr = tokio::fs::read_to_string(&csr_file)
                .await
                .with_context(|| format!("Failed to read CSR from {}", csr_file.display()))?;

            let certificate = client
                .obtain_certificate(&device.realm, &device.device_id, &secret, &csr)
                .await
                .context("Certificate request failed")?;

            println!("{}", certificate);
        }
        Commands::ProtocolInfo { device, secret } => {
            let protocol_info = client
                .get_protocol_info(&device.realm, &device.device_id, &secret)
                .await
                .context("Protocol info request failed")?;

            println!("{}", serde_json::to_string_pretty(&protocol_info)?);
        }
    }

    Ok(())
}
