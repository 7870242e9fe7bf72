//! Connection to the WWPass SPFE

#[allow(clippy::module_inception)]
mod client;
mod client_settings;
mod configuration;
mod credentials;

pub use client::{WWPASS_CA_PEM, WWPassConnection};
pub use client_settings::{ConnectionSettings, DEFAULT_SPFE_ADDRESS, DEFAULT_TIMEOUT_SECS};
pub use configuration::Configuration;
pub use credentials::ClientCredentials;
