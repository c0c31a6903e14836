// Integration tests for `HttpSource` using wiremock.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rooster_api::{DataSource, Error, HttpSource, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, HttpSource) {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());
    let source = HttpSource::from_reqwest(&base, reqwest::Client::new()).unwrap();
    (server, source)
}

fn publication_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "A deep dive",
        "imageUrl": "https://example.com/img.jpg",
        "tags": [
            { "id": "3", "label": "Research", "color": "#F0FDF4", "textColor": "#16A34A" }
        ],
        "author": { "id": "2", "name": "Dr. Sarah Chen", "avatar": "s.png" },
        "publishedDate": "15 Mar 2022",
        "readTime": "5mins"
    })
}

fn shift_json(id: &str, date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "OctendedisentShift",
        "startTime": "08:30",
        "endTime": "20:00",
        "timeDisplay": "12:00 - 20:00",
        "date": date,
        "assignee": { "id": "1", "name": "Omar r.", "avatar": "o.png" },
        "status": "Beschikbaar",
        "team": [
            { "id": "2", "name": "Elijah a.", "avatar": "e.png", "timeRange": "8:00 - 12:00", "isHighlighted": true }
        ]
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_publications_sends_json_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/publications"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            publication_json("1", "Vaccine hesitancy trends"),
            publication_json("3", "Understanding mRNA Technology"),
        ])))
        .mount(&server)
        .await;

    let transport = TransportConfig::new(&format!("{}/api", server.uri())).unwrap();
    let source = HttpSource::new(&transport).unwrap();

    let publications = source.get_publications().await.unwrap();
    assert_eq!(publications.len(), 2);
    assert_eq!(publications[1].title, "Understanding mRNA Technology");
    assert_eq!(publications[1].tags[0].label, "Research");
}

#[tokio::test]
async fn test_get_publication_by_id() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/publications/3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(publication_json("3", "Understanding mRNA Technology")),
        )
        .mount(&server)
        .await;

    let publication = source.get_publication_by_id("3").await.unwrap().unwrap();
    assert_eq!(publication.id, "3");
    assert_eq!(publication.author.name, "Dr. Sarah Chen");
}

#[tokio::test]
async fn test_search_publications_sends_query() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/publications/search"))
        .and(query_param("q", "mrna vaccines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([publication_json(
            "3",
            "Understanding mRNA Technology"
        )])))
        .mount(&server)
        .await;

    let hits = source.search_publications("mrna vaccines").await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn test_get_shifts_for_date() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/shifts"))
        .and(query_param("date", "2024-01-18"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([shift_json("1", "2024-01-18")])),
        )
        .mount(&server)
        .await;

    let day = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
    let shifts = source.get_shifts(Some(day)).await.unwrap();

    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].date, day);
    assert!(shifts[0].team_members()[0].is_highlighted);
    assert!(shifts[0].notes.is_none());
}

#[tokio::test]
async fn test_get_all_shifts_has_no_query() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/shifts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            shift_json("1", "2024-01-18"),
            shift_json("2", "2024-01-19"),
        ])))
        .mount(&server)
        .await;

    let shifts = source.get_shifts(None).await.unwrap();
    assert_eq!(shifts.len(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_lookup_404_is_none() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/shifts/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(source.get_shift_by_id("42").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_404_is_error() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/publications"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = source.get_publications().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/shifts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source.get_shifts(None).await.unwrap_err();
    match &err {
        Error::Status { status, message } => {
            assert_eq!(*status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_malformed_body_keeps_raw_text() {
    let (server, source) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/publications"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"oops\":true}"))
        .mount(&server)
        .await;

    let err = source.get_publications().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "{\"oops\":true}"),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on the discard port.
    let source = HttpSource::from_reqwest("http://127.0.0.1:9/api", reqwest::Client::new()).unwrap();
    let err = source.get_publications().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_slow_server_hits_configured_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shifts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let transport = TransportConfig::new(&format!("{}/api", server.uri()))
        .unwrap()
        .with_timeout(Duration::from_millis(50));
    let source = HttpSource::new(&transport).unwrap();
    assert_eq!(source.base_url().path(), "/api");

    let err = source.get_shifts(None).await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { timeout_ms: 50 }),
        "expected Timeout, got {err:?}"
    );
    assert!(err.is_transient());
}
