mod common;

use actix_web::{http::StatusCode, test};
use comfort_weather::{create_app, models::CurrentConditions};
use common::{FakeProvider, bare_state, state_with};
use serde_json::{Value, json};

fn provider() -> FakeProvider {
    FakeProvider::default()
        .with_city("Boston, MA", "Boston", 22.0, 50.0, 1.0)
        .with_city("Phoenix, AZ", "Phoenix", 42.0, 10.0, 9.0)
}

#[actix_web::test]
async fn test_batch_returns_one_entry_per_location_in_order() {
    let app = test::init_service(create_app(state_with(provider()))).await;

    let req = test::TestRequest::post()
        .uri("/get_weather")
        .set_json(json!({ "cities": ["Boston, MA; Atlantis", "Phoenix, AZ"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let entries = body["weather_data"].as_array().expect("weather_data array");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["original_input"], "Boston, MA");
    assert_eq!(entries[0]["city_name"], "Boston");
    assert_eq!(entries[0]["comfort_level"], "very comfortable");
    let index = entries[0]["comfort_index"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&index));

    assert_eq!(entries[1]["original_input"], "Atlantis");
    assert!(entries[1].get("city_name").is_none());
    assert!(
        entries[1]["error"]
            .as_str()
            .unwrap()
            .contains("Could not find location 'Atlantis'")
    );

    assert_eq!(entries[2]["original_input"], "Phoenix, AZ");
    let hot = entries[2]["comfort_index"].as_f64().unwrap();
    assert!(hot < index, "a hot, dry, windy day should score lower");
}

#[actix_web::test]
async fn test_api_alias_behaves_like_get_weather() {
    let app = test::init_service(create_app(state_with(provider()))).await;

    let req = test::TestRequest::post()
        .uri("/api/weather")
        .set_json(json!({ "cities": ["Boston, MA"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["weather_data"][0]["city_name"], "Boston");
}

#[actix_web::test]
async fn test_empty_location_list_is_rejected() {
    let app = test::init_service(create_app(state_with(provider()))).await;

    for cities in [json!([]), json!(["", " ; ;  "])] {
        let req = test::TestRequest::post()
            .uri("/get_weather")
            .set_json(json!({ "cities": cities }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "At least one location is required.");
    }
}

#[actix_web::test]
async fn test_malformed_body_is_a_json_bad_request() {
    let app = test::init_service(create_app(state_with(provider()))).await;

    let req = test::TestRequest::post()
        .uri("/get_weather")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"towns": ["Boston"]}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_missing_api_key_is_a_server_error() {
    let app = test::init_service(create_app(bare_state())).await;

    let req = test::TestRequest::post()
        .uri("/get_weather")
        .set_json(json!({ "cities": ["Boston, MA"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Server configuration error (API key missing).");
}

#[actix_web::test]
async fn test_only_successes_are_written_to_history() {
    let provider = provider().with_conditions(
        "Fogtown",
        "Fogtown",
        CurrentConditions {
            temp_kelvin: Some(290.0),
            humidity: None,
            wind_speed: Some(2.0),
            description: None,
        },
    );
    let state = state_with(provider);
    let store = state.history.clone();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/get_weather")
        .set_json(json!({ "cities": ["Boston, MA;Atlantis;Fogtown"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["weather_data"][2]["error"],
        "Incomplete data received from the weather service API."
    );

    assert_eq!(store.count().unwrap(), 1);

    let req = test::TestRequest::get().uri("/api/history").to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    let rows = history.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["city"], "Boston");
    assert_eq!(rows[0]["humidity"], 50);
}

#[actix_web::test]
async fn test_lookup_outcomes_are_counted() {
    let state = state_with(provider());
    let metrics = state.metrics.clone();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/get_weather")
        .set_json(json!({ "cities": ["Boston, MA; Atlantis"] }))
        .to_request();
    test::call_service(&app, req).await;

    let output = metrics.render().unwrap();
    assert!(output.contains(r#"location_lookups_total{outcome="success"} 1"#));
    assert!(output.contains(r#"location_lookups_total{outcome="not_found"} 1"#));
    assert!(output.contains("history_records_written_total 1"));
}
