use std::io::{IsTerminal, Read};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use wwpass_connection::{ClientCredentials, ConnectionSettings, WWPassConnection};

use crate::command::{CERT_FILE_ENV, ConnectionArgs, KEY_FILE_ENV};

impl ConnectionArgs {
    /// Load the Service Provider credentials and open a connection to the SPFE.
    pub async fn connect(&self) -> Result<WWPassConnection> {
        let cert = self.cert.as_ref().ok_or_else(|| {
            eyre!("Missing the Service Provider certificate, use --cert or {CERT_FILE_ENV}")
        })?;
        let key = self.key.as_ref().ok_or_else(|| {
            eyre!("Missing the Service Provider private key, use --key or {KEY_FILE_ENV}")
        })?;

        let credentials = ClientCredentials::from_files(cert, key)
            .await
            .wrap_err_with(|| {
                format!(
                    "Unable to load credentials from {} and {}",
                    cert.display(),
                    key.display()
                )
            })?;

        let settings = ConnectionSettings {
            spfe_address: self.spfe.clone(),
            timeout: self.timeout,
            ..Default::default()
        };

        tracing::debug!(spfe = %settings.spfe_address, timeout = settings.timeout, "Connecting");

        Ok(WWPassConnection::new(&credentials, Some(settings))?)
    }
}

/// The value given on the command line, or everything on stdin.
pub fn read_input(value: Option<String>) -> Result<Vec<u8>> {
    if let Some(value) = value {
        return Ok(value.into_bytes());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No data given, pass it as an argument or pipe it to stdin");
    }

    let mut data = Vec::new();
    stdin.lock().read_to_end(&mut data)?;
    Ok(data)
}
