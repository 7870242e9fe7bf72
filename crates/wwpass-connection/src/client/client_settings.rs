use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The default address of the WWPass SPFE.
pub const DEFAULT_SPFE_ADDRESS: &str = "spfe.wwpass.com";
/// The default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Basic connection settings. They are optional and uneditable once the connection is created.
///
/// Defaults to
///
/// ```
/// # use wwpass_connection::ConnectionSettings;
/// let settings = ConnectionSettings {
///     spfe_address: "spfe.wwpass.com".to_string(),
///     timeout: 10,
///     user_agent: format!("wwpass-connection/{}", env!("CARGO_PKG_VERSION")),
/// };
/// let default = ConnectionSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConnectionSettings {
    /// Host (and optional port) of the SPFE. Defaults to `spfe.wwpass.com`
    pub spfe_address: String,
    /// Request timeout in seconds. Defaults to 10
    pub timeout: u64,
    /// The user agent sent to the SPFE. Defaults to `wwpass-connection/<version>`
    pub user_agent: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            spfe_address: DEFAULT_SPFE_ADDRESS.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("wwpass-connection/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}
