//! Integration tests for the request gateway against a mock backend.
//!
//! Exercises the full pipeline: credential gating, header attachment,
//! status-to-error mapping and the credential eviction contract.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tunescope_core::{Credential, CredentialStore, MemoryStore};
use tunescope_domain::{ApiError, GeneratePlaylistRequest, Page, TimeRange, Track};
use tunescope_infra::{Gateway, GatewayConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_with_credential(server: &MockServer) -> Gateway<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.save_credential(&Credential::new("test-token".to_string(), 3600)).await.unwrap();
    Gateway::new(GatewayConfig::new(server.uri()), store).unwrap()
}

#[tokio::test]
async fn attaches_bearer_and_content_type_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user1",
            "display_name": "Test User"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let profile = gateway.current_user().await.unwrap();
    assert_eq!(profile.id, "user1");
}

#[tokio::test]
async fn top_tracks_sends_time_range_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/top/tracks"))
        .and(query_param("time_range", "short_term"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "t1", "name": "Song", "popularity": 64}],
            "total": 1
        })))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let page: Page<Track> = gateway.top_tracks(TimeRange::ShortTerm, 20).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].popularity, Some(64));
}

#[tokio::test]
async fn absent_credential_fails_without_touching_the_network() {
    let server = MockServer::start().await;
    // No mock mounted; any request would 404 and show up in the log below.

    let store = Arc::new(MemoryStore::new());
    let gateway = Gateway::new(GatewayConfig::new(server.uri()), store).unwrap();

    let result = gateway.current_user().await;
    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn expired_credential_is_evicted_without_touching_the_network() {
    let server = MockServer::start().await;

    let store = Arc::new(MemoryStore::new());
    let expired =
        Credential { access_token: "stale".to_string(), expires_at: Utc::now() - Duration::seconds(1) };
    store.save_credential(&expired).await.unwrap();

    let gateway = Gateway::new(GatewayConfig::new(server.uri()), Arc::clone(&store)).unwrap();
    let result = gateway.current_user().await;

    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    assert!(store.load_credential().await.unwrap().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_credential_is_evicted_on_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "bad token"})))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let result = gateway.current_user().await;

    match result {
        Err(ApiError::Unauthorized(message)) => assert_eq!(message, "bad token"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    // The store must be empty regardless of how valid the credential looked
    // locally; the server's verdict wins.
    assert!(gateway.store().load_credential().await.unwrap().is_none());
}

#[tokio::test]
async fn maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no such user"})))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let result = gateway.playlists().await;

    match result {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "no such user"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    // 404 does not evict the credential.
    assert!(gateway.store().load_credential().await.unwrap().is_some());
}

#[tokio::test]
async fn maps_429_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let result = gateway.current_user().await;

    // Exactly one request: the gateway never retries on its own. The
    // expect(1) above would also fail on a second attempt.
    assert!(matches!(result, Err(ApiError::RateLimited(_))));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn maps_5xx_to_server_error_with_body_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    match gateway.current_user().await {
        Err(ApiError::ServerError(message)) => assert_eq!(message, "backend exploded"),
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    match gateway.current_user().await {
        Err(ApiError::ServerError(message)) => assert!(message.contains("503")),
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_maps_to_network_failure() {
    // Nothing listens on this port.
    let store = Arc::new(MemoryStore::new());
    store.save_credential(&Credential::new("test-token".to_string(), 3600)).await.unwrap();
    let gateway = Gateway::new(GatewayConfig::new("http://127.0.0.1:9"), store).unwrap();

    let result = gateway.current_user().await;
    assert!(matches!(result, Err(ApiError::NetworkFailure(_))));
}

#[tokio::test]
async fn unparseable_success_body_maps_to_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let result = gateway.current_user().await;
    assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
}

#[tokio::test]
async fn generate_playlist_posts_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/playlists/generate"))
        .and(body_json(json!({"sourcePlaylistId": "pl1", "prompt": "rainy day jazz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "playlist": {"id": "p9", "name": "rainy day jazz", "tracks": 12, "prompt": "rainy day jazz"}
        })))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let request = GeneratePlaylistRequest::new("pl1", "rainy day jazz");
    let generated = gateway.generate_playlist(&request).await.unwrap();

    assert_eq!(generated.status, "success");
    assert_eq!(generated.playlist.tracks, 12);
}

#[tokio::test]
async fn session_cookie_is_carried_across_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "session=abc123; Path=/")
                .set_body_json(json!({"id": "u", "display_name": null})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(header("Cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    gateway.current_user().await.unwrap();
    // The backend's session cookie from the first response rides along on
    // the second request.
    assert!(gateway.playlists().await.unwrap().is_empty());
}

#[tokio::test]
async fn generic_request_sends_body_and_returns_loose_json() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/me/preferences"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({"theme": "dark"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"saved": true})))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let body = json!({"theme": "dark"});
    let value = gateway
        .request(reqwest::Method::PUT, "me/preferences", Some(&body))
        .await
        .unwrap();

    assert_eq!(value["saved"], true);
}

#[tokio::test]
async fn generic_request_maps_statuses_like_the_typed_surface() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/me/tracks/t1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "unknown track"})))
        .mount(&server)
        .await;

    let gateway = gateway_with_credential(&server).await;
    let result = gateway.request(reqwest::Method::DELETE, "me/tracks/t1", None).await;

    match result {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "unknown track"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn health_check_needs_no_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let gateway = Gateway::new(GatewayConfig::new(server.uri()), store).unwrap();
    assert!(gateway.health_check().await.unwrap());
}

#[tokio::test]
async fn health_check_reports_unhealthy_without_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let gateway = Gateway::new(GatewayConfig::new(server.uri()), store).unwrap();
    assert!(!gateway.health_check().await.unwrap());
}

#[tokio::test]
async fn base_url_with_trailing_slash_joins_cleanly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u", "display_name": null})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store.save_credential(&Credential::new("test-token".to_string(), 3600)).await.unwrap();
    let gateway =
        Gateway::new(GatewayConfig::new(format!("{}/", server.uri())), store).unwrap();

    assert!(gateway.current_user().await.is_ok());
}
