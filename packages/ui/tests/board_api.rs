use api::ApiClient;
use serde_json::json;
use ui::{Board, CargoField, Field, Modal, SubmitRequest};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Run the list load the voyages screen performs.
async fn reload(board: &mut Board, client: &ApiClient) {
    let generation = board.begin_load();
    let voyages = client.list_voyages().await.unwrap();
    assert!(board.finish_load(generation, voyages));
}

fn fill_atlas(board: &mut Board) {
    for (field, value) in [
        (Field::VesselName, "MV Atlas"),
        (Field::VoyageNumber, "V100"),
        (Field::DeparturePort, "Singapore"),
        (Field::ArrivalPort, "Rotterdam"),
        (Field::DepartureDate, "2024-01-01"),
        (Field::ArrivalDate, "2024-02-01"),
        (Field::Cargo(CargoField::Type), "Grain"),
        (Field::Cargo(CargoField::QuantityUnit), "MT"),
        (Field::Cargo(CargoField::Total), "5000"),
        (Field::Cargo(CargoField::RateUsd), "20"),
    ] {
        board.update_field(field, value).unwrap();
    }
}

#[tokio::test]
async fn test_create_then_full_reload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/voyages"))
        .and(body_partial_json(json!({
            "vesselName": "MV Atlas",
            "cargo": { "type": "Grain", "quantityUnit": "MT", "total": "5000", "rateUSD": "20" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "a1",
            "vesselName": "MV Atlas",
            "voyageNumber": "V100"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The server's list, which also contains a record another user added.
    Mock::given(method("GET"))
        .and(path("/api/voyages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "z9", "vesselName": "MV Zephyr", "voyageNumber": "V009" },
            { "_id": "a1", "vesselName": "MV Atlas", "voyageNumber": "V100",
              "departurePort": "Singapore", "arrivalPort": "Rotterdam" }
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some("jwt".to_string()));
    let mut board = Board::new(10);

    board.open_new();
    fill_atlas(&mut board);
    let request = board.begin_submit().unwrap();
    assert!(matches!(request, SubmitRequest::Create(_)));

    request.send(&client).await.unwrap();
    board.submit_succeeded();
    assert_eq!(board.modal, Modal::Closed);

    reload(&mut board, &client).await;

    let titles: Vec<_> = board.page_items().iter().map(|v| v.title()).collect();
    assert_eq!(titles.len(), 2);
    assert_eq!(board.voyages[0].vessel_name, "MV Zephyr");
    assert_eq!(
        board.voyages[1].route_summary().as_deref(),
        Some("Singapore → Rotterdam")
    );
}

#[tokio::test]
async fn test_edit_existing_puts_to_its_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/voyages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "65a1f0", "vesselName": "MV Atlas", "voyageNumber": "V100",
              "departurePort": "Singapore", "arrivalPort": "Rotterdam",
              "departureDate": "2024-01-01T00:00:00.000Z",
              "arrivalDate": "2024-02-01T00:00:00.000Z" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/voyages/65a1f0"))
        .and(body_partial_json(json!({ "remarks": "Delayed at anchorage" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "65a1f0",
            "vesselName": "MV Atlas",
            "remarks": "Delayed at anchorage"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let mut board = Board::new(10);
    reload(&mut board, &client).await;

    let first = board.page_items()[0].clone();
    board.open_existing(first);
    board.begin_edit();
    board.update_field(Field::Remarks, "Delayed at anchorage").unwrap();

    let request = board.begin_submit().unwrap();
    assert!(matches!(&request, SubmitRequest::Update { id, .. } if id == "65a1f0"));
    request.send(&client).await.unwrap();
    board.submit_succeeded();

    let posts = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == "POST")
        .count();
    assert_eq!(posts, 0);
}

#[tokio::test]
async fn test_failed_save_keeps_modal_open() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/voyages"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "voyageNumber already exists" })),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let mut board = Board::new(10);
    board.open_new();
    fill_atlas(&mut board);

    let request = board.begin_submit().unwrap();
    let err = request.send(&client).await.unwrap_err();
    board.submit_failed(err.to_string());

    let editor = board.editor().unwrap();
    assert!(!editor.saving);
    assert_eq!(editor.draft.vessel_name, "MV Atlas");
    assert_eq!(editor.error.as_deref(), Some("voyageNumber already exists"));
}

#[tokio::test]
async fn test_reset_after_logout_drops_voyages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/voyages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "1", "vesselName": "MV Atlas" }
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some("jwt".to_string()));
    let mut board = Board::new(10);
    reload(&mut board, &client).await;
    assert_eq!(board.voyages.len(), 1);

    board.reset();
    assert!(board.voyages.is_empty());
    assert_eq!(board.modal, Modal::Closed);
}
