/// Transport used to reach the SPFE.
///
/// [WWPassConnection::new][crate::WWPassConnection::new] builds one with the Service Provider
/// credentials. Constructing it directly is useful to plug in custom middleware, or to point the
/// SDK at a test server.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the SPFE, without the trailing slash (e.g. `https://spfe.wwpass.com`).
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
}
