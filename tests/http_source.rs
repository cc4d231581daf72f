mod common;

use common::mock_endpoint::{unreachable_url, MockEndpoint, MockResponse};
use userdir::config::SourceConfig;
use userdir::source::{HttpRecordSource, LoadError, RecordSource};

const USERS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": { "street": "Kulas Light", "city": "Gwenborough" },
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org"
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv",
    "phone": "010-692-6593 x09125"
  }
]"#;

fn source_for(endpoint: &str, timeout_seconds: u32) -> HttpRecordSource {
    let config = SourceConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 2,
    };
    HttpRecordSource::new(&config).expect("client should build")
}

#[tokio::test]
async fn fetches_records_in_received_order() {
    let endpoint = MockEndpoint::start(MockResponse::json(USERS_JSON)).await;
    let source = source_for(&endpoint.url, 5);

    let records = source.fetch_records().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].username.as_deref(), Some("Bret"));
    assert_eq!(records[1].email.as_deref(), Some("Shanna@melissa.tv"));
    assert_eq!(endpoint.hits(), 1);
}

#[tokio::test]
async fn error_status_maps_to_status_error() {
    let endpoint = MockEndpoint::start(MockResponse::error(500)).await;
    let source = source_for(&endpoint.url, 5);

    let err = source.fetch_records().await.unwrap_err();

    assert_eq!(err, LoadError::Status { status: 500 });
    assert_eq!(err.to_string(), "Request failed with status code 500");
    assert_eq!(endpoint.hits(), 1, "no retry expected");
}

#[tokio::test]
async fn malformed_payload_maps_to_decode_error() {
    let endpoint = MockEndpoint::start(MockResponse::json(r#"{"users": []}"#)).await;
    let source = source_for(&endpoint.url, 5);

    let err = source.fetch_records().await.unwrap_err();

    assert!(matches!(err, LoadError::Decode(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Malformed response"));
}

#[tokio::test]
async fn refused_connection_maps_to_network_error() {
    let url = unreachable_url().await;
    let source = source_for(&url, 5);

    let err = source.fetch_records().await.unwrap_err();

    assert!(matches!(err, LoadError::Network(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Network Error"));
}

#[tokio::test]
async fn slow_endpoint_maps_to_timeout() {
    let endpoint = MockEndpoint::start(MockResponse::json(USERS_JSON).with_delay(3_000)).await;
    let source = source_for(&endpoint.url, 1);

    let err = source.fetch_records().await.unwrap_err();

    assert_eq!(err, LoadError::Timeout { seconds: 1 });
}

#[tokio::test]
async fn empty_array_is_a_successful_empty_load() {
    let endpoint = MockEndpoint::start(MockResponse::json("[]")).await;
    let source = source_for(&endpoint.url, 5);

    let records = source.fetch_records().await.unwrap();

    assert!(records.is_empty());
}
