//!  Skyfare Flight Monitor
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Fetcher tests against a local HTTP server standing in for the flight search API.
//!
//! Run with:
//!     cargo test --test t_flights_search_local

use axum::Router;
use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;

use skyfare_flight_monitor::{
    FetchOutcome, FlightMonitorConfig, FlightSearchRequest, RapidApiFlightsClient, SearchOutcome,
};

const API_KEY: &str = "test-key";
const API_HOST: &str = "flights.test";

const EXPECTED_QUERY: &str = "fromEntityId=95565050&toEntityId=95565058\
     &departDate=2025-07-15&returnDate=2025-07-22\
     &market=UK&locale=en-GB&currency=GBP\
     &adults=1&includeOriginNearbyAirports=false\
     &sort=cheapest_first&stops=direct";

const SEARCH_BODY: &str = r#"{"status": true, "data": {"itineraries": [
    {"price": {"raw": 250.5, "formatted": "£251"}, "legs": []},
    {"price": {"raw": 99.0, "formatted": "£99"}, "legs": []}
]}}"#;

async fn search_flights(headers: HeaderMap, RawQuery(query): RawQuery) -> (StatusCode, String) {
    let key = headers.get("x-rapidapi-key").and_then(|v| v.to_str().ok());
    let host = headers.get("x-rapidapi-host").and_then(|v| v.to_str().ok());
    if key != Some(API_KEY) || host != Some(API_HOST) {
        return (
            StatusCode::FORBIDDEN,
            r#"{"message":"You are not subscribed to this API."}"#.to_string(),
        );
    }
    if query.as_deref() != Some(EXPECTED_QUERY) {
        return (StatusCode::BAD_REQUEST, format!("unexpected query: {:?}", query));
    }
    (StatusCode::OK, SEARCH_BODY.to_string())
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn created() -> (StatusCode, &'static str) {
    (StatusCode::CREATED, SEARCH_BODY)
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

/// Serve the stub API on an ephemeral port and return its base address.
async fn spawn_stub_api() -> String {
    let app = Router::new()
        .route("/flights/searchFlights", get(search_flights))
        .route("/flights/broken", get(not_json))
        .route("/flights/empty", get(no_content))
        .route("/flights/created", get(created));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{}", addr)
}

fn config_for(base_url: String, api_key: &str) -> FlightMonitorConfig {
    FlightMonitorConfig {
        base_url,
        from_entity_id: "95565050".into(),
        to_entity_id: "95565058".into(),
        depart_date: "2025-07-15".into(),
        return_date: "2025-07-22".into(),
        market: "UK".into(),
        locale: "en-GB".into(),
        currency: "GBP".into(),
        adults: "1".into(),
        include_origin_nearby_airports: "false".into(),
        sort: "cheapest_first".into(),
        stops: "direct".into(),
        rapidapi_key: api_key.into(),
        rapidapi_host: API_HOST.into(),
    }
}

#[tokio::test]
async fn test_search_success() {
    let base = spawn_stub_api().await;
    let config = config_for(format!("{}/flights/searchFlights", base), API_KEY);
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    let outcome = client.search_flights(&request).await.expect("search");
    let result = match outcome {
        SearchOutcome::Found(result) => result,
        other => panic!("expected itineraries, got {:?}", other),
    };
    assert_eq!(result.len(), 2);
    assert_eq!(result.itineraries()[1].formatted_price(), "£99");
}

#[tokio::test]
async fn test_http_failure_carries_status_and_body() {
    let base = spawn_stub_api().await;
    let config = config_for(format!("{}/flights/searchFlights", base), "wrong-key");
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    let fetched = client.fetch_raw(&request).await.expect("fetch");
    assert_eq!(
        fetched,
        FetchOutcome::HttpFailure {
            status: 403,
            body: r#"{"message":"You are not subscribed to this API."}"#.to_string(),
        }
    );

    match client.search_flights(&request).await.expect("search") {
        SearchOutcome::HttpFailure { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("not subscribed"));
        }
        other => panic!("expected HTTP failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_route() {
    let base = spawn_stub_api().await;
    let config = config_for(format!("{}/flights/missing", base), API_KEY);
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    let fetched = client.fetch_raw(&request).await.expect("fetch");
    assert!(matches!(fetched, FetchOutcome::HttpFailure { status: 404, .. }));
}

#[tokio::test]
async fn test_success_with_invalid_json_is_an_error() {
    let base = spawn_stub_api().await;
    let config = config_for(format!("{}/flights/broken", base), API_KEY);
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    assert!(client.search_flights(&request).await.is_err());
}

#[tokio::test]
async fn test_connection_refused_is_an_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let config = config_for(format!("http://{}/flights/searchFlights", addr), API_KEY);
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    assert!(client.fetch_raw(&request).await.is_err());
}

#[tokio::test]
async fn test_no_content_is_an_http_failure() {
    let base = spawn_stub_api().await;
    let config = config_for(format!("{}/flights/empty", base), API_KEY);
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    let fetched = client.fetch_raw(&request).await.expect("fetch");
    assert_eq!(
        fetched,
        FetchOutcome::HttpFailure {
            status: 204,
            body: String::new(),
        }
    );

    match client.search_flights(&request).await.expect("search") {
        SearchOutcome::HttpFailure { status, body } => {
            assert_eq!(status, 204);
            assert!(body.is_empty());
        }
        other => panic!("expected HTTP failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_2xx_is_an_http_failure() {
    let base = spawn_stub_api().await;
    let config = config_for(format!("{}/flights/created", base), API_KEY);
    let request = FlightSearchRequest::from_config(&config);
    let client = RapidApiFlightsClient::new().expect("client");

    let fetched = client.fetch_raw(&request).await.expect("fetch");
    assert!(matches!(fetched, FetchOutcome::HttpFailure { status: 201, .. }));
}
