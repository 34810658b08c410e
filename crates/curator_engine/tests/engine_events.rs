use std::time::Duration;

use curator_engine::{EngineEvent, EngineHandle, FetchSettings};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_event(handle: &EngineHandle) -> EngineEvent {
    for _ in 0..200 {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("engine never reported a completion");
}

#[tokio::test]
async fn engine_reports_completion_with_the_request_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data": [{"id": 11}, {"id": 12}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        endpoint: format!("{}/api/v1/artworks", server.uri()),
        ..FetchSettings::default()
    };
    let handle = EngineHandle::new(settings);
    handle.fetch_page(2, 7);

    let EngineEvent::PageFetched {
        token,
        page,
        result,
    } = wait_for_event(&handle).await;

    assert_eq!(token, 7);
    assert_eq!(page, 2);
    let records = result.expect("fetch ok");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 11);
}

#[tokio::test]
async fn engine_reports_failure_as_an_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        endpoint: format!("{}/api/v1/artworks", server.uri()),
        ..FetchSettings::default()
    };
    let handle = EngineHandle::new(settings);
    handle.fetch_page(1, 1);

    let EngineEvent::PageFetched { result, .. } = wait_for_event(&handle).await;
    assert!(result.is_err());
}
