//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use placesweep_places::request::FIELD_MASK;
use placesweep_places::{ErrorCategory, NetworkFailure, PlacesClient, PlacesError, SearchQuery};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url(Some("test-key"), 30, "placesweep-tests", base_url)
        .expect("client construction should not fail")
}

fn query() -> SearchQuery {
    SearchQuery::new((40.8075, -73.9626))
        .radius(2000.0)
        .place_types(["supermarket"])
        .max_results(5)
}

#[tokio::test]
async fn search_nearby_sends_expected_request_and_parses_places() {
    let server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "locationRestriction": {
            "circle": {
                "center": { "latitude": 40.8075, "longitude": -73.9626 },
                "radius": 2000.0
            }
        },
        "includedTypes": ["supermarket"],
        "languageCode": "en",
        "maxResultCount": 5
    });

    let response = serde_json::json!({
        "places": [
            {
                "id": "ChIJ-1",
                "displayName": { "text": "Morton Williams", "languageCode": "en" },
                "formattedAddress": "2941 Broadway, New York, NY 10025, USA",
                "rating": 4.0,
                "types": ["supermarket", "grocery_store", "food", "store"],
                "reviews": [{ "text": { "text": "Convenient" } }]
            },
            {
                "id": "ChIJ-2",
                "displayName": { "text": "Westside Market" }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/places:searchNearby"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .search_nearby(&query())
        .await
        .expect("should parse places");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Morton Williams");
    assert_eq!(places[0].types, "supermarket, grocery_store, food, store");
    assert_eq!(places[0].reviews, ["Convenient"]);
    assert_eq!(places[1].name, "Westside Market");
    assert_eq!(places[1].address, "N/A");
    assert_eq!(places[1].rating, None);
}

#[tokio::test]
async fn field_mask_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let places = test_client(&server.uri())
        .search_nearby(&query())
        .await
        .expect("empty response is not an error");
    assert!(places.is_empty());

    // The header matcher splits values on commas, so read the mask back whole.
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    let mask = requests[0]
        .headers
        .get("x-goog-fieldmask")
        .and_then(|value| value.to_str().ok());
    assert_eq!(mask, Some(FIELD_MASK));
}

async fn error_for_status(status: u16, body: serde_json::Value) -> PlacesError {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_json(&body))
        .mount(&server)
        .await;

    test_client(&server.uri())
        .search_nearby(&query())
        .await
        .expect_err("non-2xx status must fail")
}

#[tokio::test]
async fn bad_request_carries_api_message() {
    let err = error_for_status(
        400,
        serde_json::json!({
            "error": {
                "code": 400,
                "message": "Invalid included type 'supermarkets'",
                "status": "INVALID_ARGUMENT"
            }
        }),
    )
    .await;

    assert_eq!(err.category(), ErrorCategory::BadRequest);
    assert!(err.to_string().contains("Invalid included type"), "{err}");
}

#[tokio::test]
async fn forbidden_is_classified() {
    let err = error_for_status(
        403,
        serde_json::json!({
            "error": {
                "code": 403,
                "message": "Places API (New) has not been used in project"
            }
        }),
    )
    .await;
    assert_eq!(err.category(), ErrorCategory::Forbidden);
}

#[tokio::test]
async fn server_error_keeps_status() {
    let err = error_for_status(503, serde_json::json!({})).await;
    assert!(matches!(err, PlacesError::ServerError { status: 503, .. }));
}

#[tokio::test]
async fn unexpected_status_is_generic_http_error() {
    let err = error_for_status(404, serde_json::json!({ "error": "no route" })).await;
    match err {
        PlacesError::Http { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("no route"));
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let err = client.search_nearby(&query()).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NetworkError);
    assert!(matches!(
        err,
        PlacesError::Network(ref fault) if fault.kind == NetworkFailure::Connect
    ));
}
