use serde_json::json;

use super::*;

const BASE: &str = "https://places.googleapis.com";

fn body_json(request: &PlacesRequest) -> serde_json::Value {
    serde_json::to_value(&request.body).expect("body serializes")
}

#[test]
fn builds_search_nearby_body() {
    let query = SearchQuery::new((40.8075, -73.9626))
        .radius(5000.0)
        .place_types(["supermarket"])
        .max_results(5);

    let request = build_search_request(&query, Some("key-123"), BASE).unwrap();

    assert_eq!(
        request.url,
        "https://places.googleapis.com/v1/places:searchNearby"
    );
    assert_eq!(
        body_json(&request),
        json!({
            "locationRestriction": {
                "circle": {
                    "center": { "latitude": 40.8075, "longitude": -73.9626 },
                    "radius": 5000.0
                }
            },
            "includedTypes": ["supermarket"],
            "languageCode": "en",
            "maxResultCount": 5
        })
    );
}

#[test]
fn omits_type_filter_when_no_types_given() {
    let query = SearchQuery::new("40.81,-73.96");
    let request = build_search_request(&query, Some("key"), BASE).unwrap();
    let body = body_json(&request);

    assert!(body.get("includedTypes").is_none(), "body: {body}");
    assert_eq!(body["languageCode"], "en");
    assert_eq!(body["maxResultCount"], 20);
}

#[test]
fn keeps_multiple_types_in_order() {
    let query = SearchQuery::new((40.8, -73.9))
        .place_types(["supermarket", "grocery_store"]);
    let request = build_search_request(&query, Some("key"), BASE).unwrap();
    assert_eq!(
        body_json(&request)["includedTypes"],
        json!(["supermarket", "grocery_store"])
    );
}

#[test]
fn headers_carry_key_and_field_mask() {
    let query = SearchQuery::new((40.8, -73.9));
    let request = build_search_request(&query, Some("key-abc"), BASE).unwrap();
    let headers = request.headers();

    assert!(headers.contains(&("Content-Type", "application/json")));
    assert!(headers.contains(&("X-Goog-Api-Key", "key-abc")));
    assert!(headers.contains(&("X-Goog-FieldMask", FIELD_MASK)));
}

#[test]
fn query_credential_overrides_default() {
    let query = SearchQuery::new((40.8, -73.9)).credential("per-query");
    let request = build_search_request(&query, Some("configured"), BASE).unwrap();
    assert!(request.headers().contains(&("X-Goog-Api-Key", "per-query")));
}

#[test]
fn blank_query_credential_falls_back_to_default() {
    let query = SearchQuery::new((40.8, -73.9)).credential("  ");
    let request = build_search_request(&query, Some("configured"), BASE).unwrap();
    assert!(request.headers().contains(&("X-Goog-Api-Key", "configured")));
}

#[test]
fn missing_credential_is_reported_before_location() {
    let query = SearchQuery::new("not a location");
    let result = build_search_request(&query, None, BASE);
    assert!(
        matches!(result, Err(PlacesError::MissingCredential)),
        "got: {result:?}"
    );
}

#[test]
fn free_text_location_is_rejected() {
    let query = SearchQuery::new("Times Square");
    let result = build_search_request(&query, Some("key"), BASE);
    assert!(matches!(result, Err(PlacesError::InvalidLocation { .. })));
}

#[test]
fn non_positive_radius_is_rejected() {
    for radius in [0.0, -5.0, f64::NAN] {
        let query = SearchQuery::new((40.8, -73.9)).radius(radius);
        let result = build_search_request(&query, Some("key"), BASE);
        assert!(
            matches!(
                result,
                Err(PlacesError::InvalidQuery {
                    field: "radius",
                    ..
                })
            ),
            "radius {radius}: {result:?}"
        );
    }
}

#[test]
fn result_cap_is_bounded() {
    for max in [0, MAX_RESULT_CAP + 1] {
        let query = SearchQuery::new((40.8, -73.9)).max_results(max);
        let result = build_search_request(&query, Some("key"), BASE);
        assert!(matches!(
            result,
            Err(PlacesError::InvalidQuery {
                field: "max_results",
                ..
            })
        ));
    }
}

#[test]
fn empty_language_is_rejected() {
    let query = SearchQuery::new((40.8, -73.9)).language("");
    let result = build_search_request(&query, Some("key"), BASE);
    assert!(matches!(
        result,
        Err(PlacesError::InvalidQuery {
            field: "language",
            ..
        })
    ));
}

#[test]
fn base_url_trailing_slash_is_normalised() {
    let query = SearchQuery::new((40.8, -73.9));
    let request = build_search_request(&query, Some("key"), "http://127.0.0.1:9000/").unwrap();
    assert_eq!(request.url, "http://127.0.0.1:9000/v1/places:searchNearby");
}

#[test]
fn debug_output_redacts_credentials() {
    let query = SearchQuery::new((40.8, -73.9)).credential("hunter2");
    let request = build_search_request(&query, None, BASE).unwrap();
    assert!(!format!("{query:?}").contains("hunter2"));
    assert!(!format!("{request:?}").contains("hunter2"));
}
