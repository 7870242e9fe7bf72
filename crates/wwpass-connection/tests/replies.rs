//! How malformed or unexpected SPFE replies surface to callers.

use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};
use wwpass_connection::{
    ApiError, Configuration, ProtocolError, Ticket, TicketRequest, WWPassConnection, WWPassError,
};
use wwpass_test::{SpfeReply, spfe_path, start_spfe_mock};

async fn get_ticket_with(response: impl wiremock::Respond + 'static) -> WWPassError {
    let (_server, config) = start_spfe_mock(vec![Mock::given(method("GET"))
        .and(path(spfe_path("get")))
        .respond_with(response)])
    .await;
    let connection = WWPassConnection::from_configuration(config);

    connection
        .tickets()
        .get_ticket(&TicketRequest::default())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_invalid_ttl() {
    let err = get_ticket_with(SpfeReply::ok("SP:t").ttl("soon")).await;
    assert!(matches!(err, WWPassError::Protocol(ProtocolError::InvalidTtl)));
    assert_eq!(err.to_string(), "unable to convert ttl to int");
}

#[tokio::test]
async fn test_spfe_error_base64_message() {
    let err = get_ticket_with(SpfeReply::error("Invalid SP certificate").base64()).await;
    assert_eq!(
        err.to_string(),
        "SPFE returned error: Invalid SP certificate"
    );
}

#[tokio::test]
async fn test_not_xml() {
    let err = get_ticket_with(ResponseTemplate::new(200).set_body_string("<html><body>")).await;
    assert!(matches!(err, WWPassError::Protocol(_)));
}

#[tokio::test]
async fn test_doctype_is_rejected() {
    let xml = r#"<?xml version="1.0"?><!DOCTYPE reply [<!ENTITY x "y">]><reply><result>true</result><data>&x;</data></reply>"#;
    let err = get_ticket_with(ResponseTemplate::new(200).set_body_string(xml)).await;
    assert!(matches!(err, WWPassError::Protocol(ProtocolError::Malformed(_))));
}

#[tokio::test]
async fn test_not_found_status() {
    let err = get_ticket_with(ResponseTemplate::new(404)).await;
    assert!(matches!(
        err,
        WWPassError::Api(ApiError::Response { status, .. }) if status == 404
    ));
}

#[tokio::test]
async fn test_unreachable_spfe() {
    // Reserve a free port, then release it so nothing is listening there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let connection = WWPassConnection::from_configuration(Configuration {
        base_path: format!("http://127.0.0.1:{port}"),
        client: reqwest::Client::new().into(),
    });

    let err = connection
        .tickets()
        .get_puid(&Ticket::new("SP:t"), Default::default())
        .await
        .unwrap_err();

    assert!(
        matches!(err, WWPassError::Api(ApiError::NotConnected(_))),
        "unexpected error: {err:?}"
    );
}
