//! Integration tests for the inactive-device feedback report.

mod common;

use chrono::{TimeZone, Utc};
use common::{blocking, client_for, NoBody, AUTH};
use serde_json::json;
use ua_api::{Platform, Timestamp, UaError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn feedback_returns_records_in_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/device_tokens/feedback/"))
        .and(query_param("since", "2012-01-01T00:00:00Z"))
        .and(header("authorization", AUTH))
        .and(NoBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "device_token": "TOKEN-B",
                "marked_inactive_on": "2012-01-02 03:04:05",
                "alias": "bob"
            },
            {
                "device_token": "TOKEN-A",
                "marked_inactive_on": "sometime yesterday",
                "alias": null
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let records = blocking(move || {
        let since = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
        client_for(&uri).feedback(since)
    })
    .await
    .unwrap();

    assert_eq!(records.len(), 2);

    let (id, ts, alias) = records[0].as_tuple();
    assert_eq!(id, "TOKEN-B");
    assert_eq!(
        ts.as_datetime(),
        Some(&Utc.with_ymd_and_hms(2012, 1, 2, 3, 4, 5).unwrap())
    );
    assert_eq!(alias, Some("bob"));

    let (id, ts, alias) = records[1].as_tuple();
    assert_eq!(id, "TOKEN-A");
    assert_eq!(ts, &Timestamp::Raw("sometime yesterday".into()));
    assert_eq!(alias, None);
}

#[tokio::test]
async fn android_feedback_uses_apid_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/apids/feedback/"))
        .and(query_param("since", "2013-05-06T07:08:09Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"apid": "11-22", "marked_inactive_on": "2013-05-07T00:00:00Z", "alias": "droid"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let records = blocking(move || {
        let since = Utc.with_ymd_and_hms(2013, 5, 6, 7, 8, 9).unwrap();
        client_for(&uri).feedback_for(Platform::Android, since)
    })
    .await
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].device_identifier, "11-22");
    assert!(records[0].marked_inactive_on.as_datetime().is_some());
}

#[tokio::test]
async fn feedback_fails_on_non_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/device_tokens/feedback/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("try again"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client_for(&uri).feedback(Utc::now()))
        .await
        .unwrap_err();

    assert!(matches!(err, UaError::ProviderFailure { status: 500, .. }));
}

#[tokio::test]
async fn feedback_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client_for(&uri).feedback(Utc::now()))
        .await
        .unwrap_err();

    assert!(matches!(err, UaError::Serialization(_)));
}
