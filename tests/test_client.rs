//! Report client behavior that does not need a live server.

mod common;

use std::time::Duration;

use pacs_sizing::{ReportClient, SizingError};

#[test]
fn validates_before_touching_the_network() {
    let client = ReportClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let mut request = common::sample_request();
    request.unit_name = String::new();
    // An invalid payload short-circuits; no connection is attempted.
    let result = client.generate_pdf(&request);
    assert!(matches!(result, Err(SizingError::MissingUnitName)));
}

#[test]
fn unreachable_server_surfaces_an_http_error() {
    // Port 9 (discard) is not listening; the connection fails fast.
    let client = ReportClient::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let result = client.generate_pdf(&common::sample_request());
    assert!(matches!(result, Err(SizingError::Http(_))));
}

#[test]
fn busy_flag_is_released_after_a_failed_request() {
    let client = ReportClient::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    assert!(!client.is_busy());
    let _ = client.generate_pdf(&common::sample_request());
    // The guard resets the flag on the error path too.
    assert!(!client.is_busy());
}
