use api::{ApiClient, ApiError, Session};
use serde_json::json;
use store::{QuantityUnit, Voyage};
use wiremock::{
    matchers::{self, body_partial_json, header, method},
    Mock, MockServer, ResponseTemplate,
};

fn atlas() -> Voyage {
    serde_json::from_value(json!({
        "vesselName": "MV Atlas",
        "voyageNumber": "V100",
        "departurePort": "Singapore",
        "arrivalPort": "Rotterdam",
        "departureDate": "2024-01-01",
        "arrivalDate": "2024-02-01",
        "cargo": { "type": "Grain", "quantityUnit": "MT", "total": "5000", "rateUSD": "20" }
    }))
    .unwrap()
}

#[tokio::test]
async fn test_list_voyages_sends_bearer_token_and_keeps_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(matchers::path("/api/voyages"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "1", "vesselName": "MV Atlas", "voyageNumber": "V100" },
            { "_id": "2", "vesselName": "MV Borealis", "voyageNumber": "V200" },
            { "_id": "3", "vesselName": "MV Cygnus", "voyageNumber": "V300" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some("secret-token".to_string()));
    let voyages = client.list_voyages().await.unwrap();

    let ids: Vec<_> = voyages.iter().filter_map(|v| v.id.as_deref()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(voyages[1].vessel_name, "MV Borealis");
}

#[tokio::test]
async fn test_anonymous_client_sends_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(matchers::path("/api/voyages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some(String::new()));
    assert!(client.token().is_none());
    assert!(client.list_voyages().await.unwrap().is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_create_voyage_posts_draft_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(matchers::path("/api/voyages"))
        .and(body_partial_json(json!({
            "vesselName": "MV Atlas",
            "voyageNumber": "V100",
            "departurePort": "Singapore",
            "arrivalPort": "Rotterdam",
            "departureDate": "2024-01-01T00:00:00.000Z",
            "arrivalDate": "2024-02-01T00:00:00.000Z",
            "cargo": { "type": "Grain", "quantityUnit": "MT", "total": "5000", "rateUSD": "20" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "new-id",
            "vesselName": "MV Atlas",
            "voyageNumber": "V100"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let created = client.create_voyage(&atlas()).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("new-id"));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_update_voyage_puts_to_id_route() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(matchers::path("/api/voyages/65a1f0"))
        .and(body_partial_json(json!({ "remarks": "Delayed at anchorage" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "65a1f0",
            "vesselName": "MV Atlas",
            "remarks": "Delayed at anchorage",
            "cargo": { "quantityUnit": "KG" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut voyage = atlas();
    voyage.remarks = "Delayed at anchorage".to_string();

    let client = ApiClient::new(format!("{}/", server.uri()));
    let updated = client.update_voyage("65a1f0", &voyage).await.unwrap();
    assert_eq!(updated.remarks, "Delayed at anchorage");
    assert_eq!(updated.cargo.quantity_unit, QuantityUnit::Kg);
}

#[tokio::test]
async fn test_non_2xx_surfaces_backend_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(matchers::path("/api/voyages"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "voyageNumber already exists" })),
        )
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri())
        .create_voyage(&atlas())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { .. }));
    assert_eq!(err.to_string(), "voyageNumber already exists");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn test_login_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(matchers::path("/api/auth/login"))
        .and(body_partial_json(json!({ "email": "ops@example.com", "password": "hunter22" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-abc",
            "user": { "id": "u1", "username": "ops", "email": "ops@example.com" }
        })))
        .mount(&server)
        .await;

    let res = ApiClient::new(server.uri())
        .login("ops@example.com", "hunter22")
        .await
        .unwrap();
    let session = Session::from(res);

    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.display_name(), "ops");
}

#[tokio::test]
async fn test_login_failure_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(matchers::path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri())
        .login("ops@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_register_returns_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(matchers::path("/api/auth/register"))
        .and(body_partial_json(json!({
            "username": "ops",
            "email": "ops@example.com",
            "password": "hunter22"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "message": "User registered successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let res = ApiClient::new(server.uri())
        .register("ops", "ops@example.com", "hunter22")
        .await
        .unwrap();
    assert_eq!(res.message, "User registered successfully");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Grab a free port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ApiClient::new(format!("http://{addr}"))
        .list_voyages()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
