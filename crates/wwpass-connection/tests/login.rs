use wiremock::{
    Mock,
    matchers::{method, path, query_param},
};
use wwpass_connection::{AuthType, WWPassConnection, login::ticket_from_query};
use wwpass_test::{SpfeReply, spfe_path, start_spfe_mock};

#[tokio::test]
async fn test_authenticate_uses_reissued_ticket() {
    let (_server, config) = start_spfe_mock(vec![
        Mock::given(method("GET"))
            .and(path(spfe_path("put")))
            .and(query_param("ticket", "SP:one-time"))
            .and(query_param("auth_type", "p"))
            .respond_with(
                SpfeReply::ok("SP:reissued")
                    .ttl(1200)
                    .original_ticket("SP:one-time"),
            )
            .expect(1),
        Mock::given(method("GET"))
            .and(path(spfe_path("puid")))
            .and(query_param("ticket", "SP:reissued"))
            .and(query_param("auth_type", "p"))
            .respond_with(SpfeReply::ok("user-puid"))
            .expect(1),
    ])
    .await;
    let connection = WWPassConnection::from_configuration(config);

    let ticket = ticket_from_query("?ticket=SP%3Aone-time&status=200").unwrap();
    let user = connection
        .login()
        .authenticate(&ticket, AuthType::PASSKEY_AND_ACCESS_CODE)
        .await
        .unwrap();

    assert_eq!(user.puid.as_str(), "user-puid");
    assert_eq!(user.ticket.as_str(), "SP:reissued");
    assert_eq!(user.ttl, Some(1200));
}

#[tokio::test]
async fn test_authenticate_without_ttl() {
    let (_server, config) = start_spfe_mock(vec![
        Mock::given(method("GET"))
            .and(path(spfe_path("put")))
            .respond_with(SpfeReply::ok("SP:reissued"))
            .expect(1),
        Mock::given(method("GET"))
            .and(path(spfe_path("puid")))
            .and(query_param("ticket", "SP:reissued"))
            .respond_with(SpfeReply::ok("user-puid"))
            .expect(1),
    ])
    .await;
    let connection = WWPassConnection::from_configuration(config);

    let user = connection
        .login()
        .authenticate(&"SP:one-time".into(), AuthType::PASSKEY)
        .await
        .unwrap();

    assert_eq!(user.puid.as_str(), "user-puid");
    assert_eq!(user.ticket.as_str(), "SP:reissued");
    assert_eq!(user.ttl, None);
}

#[tokio::test]
async fn test_authenticate_rejected_ticket() {
    let (_server, config) = start_spfe_mock(vec![
        Mock::given(method("GET"))
            .and(path(spfe_path("put")))
            .respond_with(SpfeReply::error("Invalid ticket")),
        Mock::given(method("GET"))
            .and(path(spfe_path("puid")))
            .respond_with(SpfeReply::ok("never"))
            .expect(0),
    ])
    .await;
    let connection = WWPassConnection::from_configuration(config);

    let err = connection
        .login()
        .authenticate(&"SP:expired".into(), AuthType::PASSKEY)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "SPFE returned error: Invalid ticket");
}
