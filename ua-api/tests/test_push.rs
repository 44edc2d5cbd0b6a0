//! Integration tests for push, batch push and broadcast.

mod common;

use common::{blocking, client_for, AUTH};
use serde_json::{json, Map};
use ua_api::{Platform, PushOptions, PushPayload, UaError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn push_posts_ios_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/"))
        .and(header("authorization", AUTH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "aps": {"alert": "hi", "sound": "default", "badge": 3},
            "device_tokens": ["T1", "T2"],
            "tags": ["news"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let options = PushOptions {
            device_identifiers: vec!["T1".into(), "T2".into()],
            tags: vec!["news".into()],
            badge: Some(3),
            sound: Some("default".into()),
            ..Default::default()
        };
        client_for(&uri).push("hi", &options, Platform::Ios)
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn push_posts_android_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/"))
        .and(body_json(json!({
            "android": {"alert": "hello", "extra": {"screen": "inbox"}},
            "apids": ["11-22"],
            "aliases": ["user-9"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let mut extra = Map::new();
        extra.insert("screen".into(), json!("inbox"));
        let options = PushOptions {
            extra,
            device_identifiers: vec!["11-22".into()],
            aliases: vec!["user-9".into()],
            ..Default::default()
        };
        client_for(&uri).push("hello", &options, "android")
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn push_body_is_compact_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || client_for(&uri).push("café", &PushOptions::default(), Platform::Ios))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"aps":{"alert":"café"}}"#
    );
}

#[tokio::test]
async fn push_requires_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202).set_body_string("accepted later"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client_for(&uri).push("hi", &PushOptions::default(), Platform::Ios))
        .await
        .unwrap_err();

    match err {
        UaError::ProviderFailure { status, body } => {
            assert_eq!(status, 202);
            assert_eq!(body, "accepted later");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn push_batch_posts_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/batch/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!([
            {"aps": {"alert": "one"}, "device_tokens": ["T1"]},
            {"android": {"alert": "two"}, "apids": ["A1"]}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let payloads = vec![
            PushPayload::build(
                "one",
                &PushOptions {
                    device_identifiers: vec!["T1".into()],
                    ..Default::default()
                },
                Platform::Ios,
            ),
            PushPayload::build(
                "two",
                &PushOptions {
                    device_identifiers: vec!["A1".into()],
                    ..Default::default()
                },
                Platform::Android,
            ),
        ];
        client_for(&uri).push_batch(&payloads)
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn push_batch_failure_covers_whole_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/batch/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("payload 2 invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || {
        let payload = PushPayload::build("one", &PushOptions::default(), Platform::Ios);
        client_for(&uri).push_batch(&[payload.clone(), payload])
    })
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn broadcast_merges_exclusions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/broadcast/"))
        .and(body_json(json!({
            "aps": {"alert": "everyone", "badge": 1},
            "exclude_tokens": ["T9"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let options = PushOptions {
            badge: Some(1),
            ..Default::default()
        };
        let payload = PushPayload::build("everyone", &options, Platform::Ios);
        client_for(&uri).broadcast(&payload, &["T9".to_string()])
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn broadcast_without_exclusions_sends_payload_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/push/broadcast/"))
        .and(body_json(json!({"android": {"alert": "everyone"}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let payload = PushPayload::build("everyone", &PushOptions::default(), Platform::Android);
        client_for(&uri).broadcast(&payload, &[])
    })
    .await
    .unwrap();
}
