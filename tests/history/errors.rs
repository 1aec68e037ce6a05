use crate::common::{client_for, setup_server};
use chrono::{TimeZone, Utc};
use fairvalue_rs::{HistoryBuilder, YfError};
use httpmock::Method::GET;

#[tokio::test]
async fn chart_error_node_is_a_data_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#);
    });

    let client = client_for(&server);
    let err = HistoryBuilder::new(&client, "NOPE").fetch().await.unwrap_err();
    match err {
        YfError::Data(msg) => assert!(msg.contains("Not Found"), "{msg}"),
        other => panic!("expected Data, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_period_is_rejected_before_any_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(200);
    });

    let client = client_for(&server);
    let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = HistoryBuilder::new(&client, "AAPL")
        .between(t, t)
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, YfError::InvalidDates));
    mock.assert_hits(0);
}

#[tokio::test]
async fn not_found_maps_to_status() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(404);
    });

    let client = client_for(&server);
    let err = HistoryBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, YfError::Status { status: 404, .. }), "got {err:?}");
}
