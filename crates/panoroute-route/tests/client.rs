//! Integration tests for `DirectionsClient` using wiremock HTTP mocks.

use panoroute_core::GeoPoint;
use panoroute_route::{DirectionsClient, RouteError, TravelMode};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DirectionsClient {
    DirectionsClient::with_base_url("test-key", 30, "panoroute-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn point(lon: f64, lat: f64) -> GeoPoint {
    GeoPoint::new(lon, lat).expect("test point should be valid")
}

fn boston_endpoints() -> (GeoPoint, GeoPoint) {
    (point(-71.06229, 42.35628), point(-71.05818, 42.35155))
}

#[tokio::test]
async fn get_route_returns_polyline_and_raw_collection() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "summary": { "distance": 612.3, "duration": 441.0 }
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [-71.06229, 42.35628],
                    [-71.06040, 42.35401],
                    [-71.05818, 42.35155]
                ]
            }
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v2/directions/foot-walking/geojson"))
        .and(header("authorization", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "coordinates": [[-71.06229, 42.35628], [-71.05818, 42.35155]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let (origin, destination) = boston_endpoints();
    let route = client
        .get_route(origin, destination, TravelMode::Walking)
        .await
        .expect("should parse route");

    assert_eq!(route.geometry.points().len(), 3);
    assert_eq!(route.geometry.points()[0], origin);
    assert_eq!(route.geometry.points()[2], destination);
    assert_eq!(route.raw.features.len(), 1);
}

#[tokio::test]
async fn driving_mode_hits_driving_profile_path() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": [[-71.06229, 42.35628], [-71.05818, 42.35155]]
            }
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let (origin, destination) = boston_endpoints();
    client
        .get_route(origin, destination, TravelMode::Driving)
        .await
        .expect("driving route should parse");
}

#[tokio::test]
async fn api_error_surfaces_status_and_message() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": { "code": 2003, "message": "Access to this API has been disallowed" }
    });

    Mock::given(method("POST"))
        .and(path("/v2/directions/foot-walking/geojson"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let (origin, destination) = boston_endpoints();
    let result = client
        .get_route(origin, destination, TravelMode::Walking)
        .await;

    match result {
        Err(RouteError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert!(
                message.contains("disallowed"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected RouteError::Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn response_without_linestring_is_empty_route() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [-71.06229, 42.35628] }
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v2/directions/foot-walking/geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let (origin, destination) = boston_endpoints();
    let result = client
        .get_route(origin, destination, TravelMode::Walking)
        .await;

    assert!(
        matches!(result, Err(RouteError::EmptyRoute)),
        "expected EmptyRoute, got: {result:?}"
    );
}

#[tokio::test]
async fn non_geojson_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/foot-walking/geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let (origin, destination) = boston_endpoints();
    let result = client
        .get_route(origin, destination, TravelMode::Walking)
        .await;

    assert!(
        matches!(result, Err(RouteError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn single_point_linestring_is_invalid_geometry() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": [[-71.06229, 42.35628]]
            }
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v2/directions/foot-walking/geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let (origin, destination) = boston_endpoints();
    let result = client
        .get_route(origin, destination, TravelMode::Walking)
        .await;

    assert!(
        matches!(result, Err(RouteError::InvalidGeometry(_))),
        "expected InvalidGeometry, got: {result:?}"
    );
}
