//! PDF renderer tests: payload in, well-formed PDF bytes out.

mod common;

use pacs_sizing::models::MarginConfig;
use pacs_sizing::render::pdf::decode_data_url;
use pacs_sizing::{PdfReportRenderer, Projector, ReportRenderer, SizingError};

#[test]
fn renders_a_pdf_document() {
    let renderer = PdfReportRenderer::new();
    let bytes = renderer.render(&common::sample_request()).unwrap();

    assert!(bytes.starts_with(b"%PDF"), "missing PDF header");
    assert!(bytes.len() > 500, "suspiciously small document");
}

#[test]
fn renders_with_chart_images() {
    let renderer = PdfReportRenderer::new();
    let plain = renderer.render(&common::sample_request()).unwrap();
    let with_charts = renderer
        .render(&common::sample_request_with_charts())
        .unwrap();

    assert!(with_charts.starts_with(b"%PDF"));
    // Two embedded bitmaps must leave a visibly larger document.
    assert!(with_charts.len() > plain.len());
}

#[test]
fn renders_with_margin_and_custom_year() {
    let inputs = common::clinic_mix();
    let report = Projector::builder()
        .margin(MarginConfig::progressive(10.0))
        .custom_year(Some(7))
        .build()
        .unwrap()
        .project(&inputs)
        .unwrap();
    let request = pacs_sizing::models::ReportRequest::from_report(
        "Margin Unit",
        &inputs,
        &report,
        None,
        "2026-08-05",
    );

    let bytes = PdfReportRenderer::new().render(&request).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn invalid_chart_image_is_skipped_not_fatal() {
    let mut request = common::sample_request_with_charts();
    request.chart_images.as_mut().unwrap().distribution =
        Some("data:image/png;base64,not-really-base64!!!".to_string());

    let bytes = PdfReportRenderer::new().render(&request).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn rejects_a_blank_unit_name() {
    let mut request = common::sample_request();
    request.unit_name = String::new();
    let result = PdfReportRenderer::new().render(&request);
    assert!(matches!(result, Err(SizingError::MissingUnitName)));
}

#[test]
fn written_report_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");

    let bytes = PdfReportRenderer::new()
        .render(&common::sample_request())
        .unwrap();
    std::fs::write(&path, &bytes).unwrap();

    let read_back = std::fs::read(&path).unwrap();
    assert_eq!(read_back, bytes);
}

// ---------------------------------------------------------------------------
// data URL parsing
// ---------------------------------------------------------------------------

#[test]
fn decodes_a_png_data_url() {
    let url = common::chart_data_url();
    let bytes = decode_data_url(&url).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn rejects_non_data_urls() {
    assert!(decode_data_url("https://example.com/chart.png").is_err());
    assert!(decode_data_url("data:image/png,raw-not-base64").is_err());
    assert!(decode_data_url("data:image/png;base64").is_err());
}
