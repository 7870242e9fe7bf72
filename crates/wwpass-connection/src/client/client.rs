use std::{sync::Arc, time::Duration};

use crate::{
    CredentialsError,
    client::{ClientCredentials, Configuration, ConnectionSettings},
};

/// The WWPass Corporation Primary Root CA. The SPFE certificate must chain to it, no other
/// trust anchor is accepted.
pub const WWPASS_CA_PEM: &str = include_str!("wwpass_ca.pem");

/// The main struct to interact with the WWPass SPFE.
///
/// Cloning is cheap and returns a handle to the same connection pool, so a single instance can
/// be shared between all request handlers of an application.
#[derive(Debug, Clone)]
pub struct WWPassConnection {
    pub(crate) configuration: Arc<Configuration>,
}

impl WWPassConnection {
    /// Create a connection authenticated with the Service Provider credentials.
    pub fn new(
        credentials: &ClientCredentials,
        settings: Option<ConnectionSettings>,
    ) -> Result<Self, CredentialsError> {
        let settings = settings.unwrap_or_default();

        let root_ca = reqwest::Certificate::from_pem(WWPASS_CA_PEM.as_bytes())
            .map_err(|e| CredentialsError::Tls(e.to_string()))?;

        let http_client = new_http_client_builder(&settings)
            .identity(credentials.to_identity()?)
            .add_root_certificate(root_ca)
            .build()
            .map_err(|e| CredentialsError::Tls(e.to_string()))?;

        tracing::debug!(spfe = %settings.spfe_address, "Created SPFE connection");

        Ok(Self::from_configuration(Configuration {
            base_path: format!("https://{}", settings.spfe_address),
            client: reqwest_middleware::ClientBuilder::new(http_client).build(),
        }))
    }

    /// Create a connection on top of an already configured transport.
    pub fn from_configuration(configuration: Configuration) -> Self {
        Self {
            configuration: Arc::new(configuration),
        }
    }

    /// The transport used by this connection.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

fn new_http_client_builder(settings: &ConnectionSettings) -> reqwest::ClientBuilder {
    let timeout = Duration::from_secs(settings.timeout);

    reqwest::Client::builder()
        .use_rustls_tls()
        .tls_built_in_root_certs(false)
        .https_only(true)
        .connect_timeout(timeout)
        .timeout(timeout)
        .user_agent(settings.user_agent.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_root_ca_parses() {
        assert!(WWPASS_CA_PEM.starts_with("-----BEGIN CERTIFICATE-----"));
        reqwest::Certificate::from_pem(WWPASS_CA_PEM.as_bytes()).unwrap();
    }

    const SP_CERTIFICATE: &str = include_str!("../../resources/sp.crt");

    fn credentials(private_key_pem: &str) -> ClientCredentials {
        ClientCredentials::from_pem(SP_CERTIFICATE, private_key_pem).unwrap()
    }

    #[test]
    fn test_new_with_pkcs8_key() {
        let credentials = credentials(include_str!("../../resources/sp_pkcs8.key"));

        let connection = WWPassConnection::new(&credentials, None).unwrap();
        assert_eq!(
            connection.configuration().base_path,
            "https://spfe.wwpass.com"
        );
    }

    #[test]
    fn test_new_with_pkcs1_key() {
        let credentials = credentials(include_str!("../../resources/sp_pkcs1.key"));
        let settings = ConnectionSettings {
            spfe_address: "spfe.example.com:8443".to_owned(),
            ..Default::default()
        };

        let connection = WWPassConnection::new(&credentials, Some(settings)).unwrap();
        assert_eq!(
            connection.configuration().base_path,
            "https://spfe.example.com:8443"
        );
    }

    #[test]
    fn test_from_configuration_keeps_base_path() {
        let connection = WWPassConnection::from_configuration(Configuration {
            base_path: "http://127.0.0.1:1".to_owned(),
            client: reqwest::Client::new().into(),
        });

        assert_eq!(connection.configuration().base_path, "http://127.0.0.1:1");
        let cloned = connection.clone();
        assert!(Arc::ptr_eq(&connection.configuration, &cloned.configuration));
    }
}
