use wwpass_connection::Configuration;

/// Helper for testing against a fake SPFE using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_spfe_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, Configuration) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = Configuration {
        base_path: server.uri(),
        client: reqwest::Client::new().into(),
    };

    (server, config)
}

/// Request path of an SPFE command, e.g. `sp/read` maps to `/sp/read.xml`.
pub fn spfe_path(command: &str) -> String {
    format!("/{command}.xml")
}
