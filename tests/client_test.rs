//! Seat service client tests against a mock HTTP server

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roost::{BookingRequest, RoostError, SeatServiceClient, SeatStatus};
use roost::session::{self, ProbeOutcome};

async fn mock_server_with_seats(seats: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seats))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_list_seats_parses_snapshot() {
    let server = mock_server_with_seats(json!([
        {"id": 1, "status": "available", "price": 5},
        {
            "id": 2,
            "status": "occupied",
            "price": 5,
            "booking_time": "2025-06-01T12:00:00Z",
            "booked_by": "ada@ibm.com",
            "user_details": {"full_name": "Ada Lovelace"}
        }
    ]))
    .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    let seats = client.list_seats().await.unwrap();

    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].status, SeatStatus::Available);
    assert_eq!(seats[1].booked_by.as_deref(), Some("ada@ibm.com"));
    assert_eq!(
        seats[1]
            .user_details
            .as_ref()
            .unwrap()
            .full_name
            .as_deref(),
        Some("Ada Lovelace")
    );
}

#[tokio::test]
async fn test_book_seat_sends_full_request() {
    let server = MockServer::start().await;
    let request = BookingRequest {
        seat_id: 7,
        w3_id: "ada@ibm.com".to_string(),
        name: "Ada Lovelace".to_string(),
        date: "Today".to_string(),
        time_slot: "12:30 PM".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/book"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    client.book_seat(&request).await.unwrap();
}

#[tokio::test]
async fn test_book_conflict_surfaces_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/book"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "Seat already booked"})),
        )
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    let request = BookingRequest {
        seat_id: 7,
        w3_id: "ada@ibm.com".to_string(),
        name: "Ada Lovelace".to_string(),
        date: "Today".to_string(),
        time_slot: "12:00 PM".to_string(),
    };

    match client.book_seat(&request).await {
        Err(RoostError::Api { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Seat already booked");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_release_hits_seat_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/release/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    client.release_seat(42).await.unwrap();
}

#[tokio::test]
async fn test_error_without_detail_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/release/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    match client.release_seat(1).await {
        Err(RoostError::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_error_is_http_error() {
    // Nothing is listening on this port.
    let client = SeatServiceClient::new("http://127.0.0.1:9").unwrap();
    match client.list_seats().await {
        Err(RoostError::Http(_)) => {}
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_whoami_parses_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "w3_id": "ada@ibm.com",
            "name": "Ada Lovelace",
            "email": "ada@ibm.com"
        })))
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    let user = client.whoami().await.unwrap();
    assert_eq!(user.w3_id, "ada@ibm.com");
    assert_eq!(user.display_name(), "Ada Lovelace");
}

// ============================================================================
// Session probe
// ============================================================================

#[tokio::test]
async fn test_probe_unauthenticated_points_at_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/seats"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not signed in"})))
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    match session::probe(&client, "ada@ibm.com").await {
        ProbeOutcome::Unauthenticated { login_url } => {
            assert_eq!(login_url, format!("{}/auth/login", server.uri()));
        }
        other => panic!("expected Unauthenticated, got {other:?}"),
    }
}

#[tokio::test]
async fn test_probe_authenticated_uses_whoami_identity() {
    let server = mock_server_with_seats(json!([])).await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "w3_id": "ada@ibm.com",
            "name": "Ada Lovelace"
        })))
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    match session::probe(&client, "entered@ibm.com").await {
        ProbeOutcome::Authenticated(user) => {
            assert_eq!(user.w3_id, "ada@ibm.com");
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

#[tokio::test]
async fn test_probe_falls_back_to_entered_identifier() {
    // Seats respond but /me does not: the session is valid, identity falls
    // back to what the user typed.
    let server = mock_server_with_seats(json!([])).await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = SeatServiceClient::new(&server.uri()).unwrap();
    match session::probe(&client, "entered@ibm.com").await {
        ProbeOutcome::Authenticated(user) => {
            assert_eq!(user.w3_id, "entered@ibm.com");
            assert_eq!(user.display_name(), "Employee");
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
}
