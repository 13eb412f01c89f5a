//! Shared fixtures for the projection calculator and report tests.
//!
//! Provides canonical exam sets, a ready-made render payload and a small
//! generated chart image so individual tests stay focused on behavior.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pacs_sizing::models::{
    ChartImages, ExamInput, ExamQuantity, Modality, ProjectionReport, ReportRequest,
};
use pacs_sizing::Projector;

/// A single MRI running 2 exams of 600 MB per day — the canonical
/// end-to-end scenario (daily 1200 MB, monthly 36000 MB).
pub fn mri_only() -> Vec<ExamInput> {
    vec![ExamInput::modality(
        Modality::Mri,
        600.0,
        ExamQuantity::Daily(2.0),
    )]
}

/// A small mixed clinic: MRI by daily count, CT by monthly goal, plus one
/// custom exam type.
pub fn clinic_mix() -> Vec<ExamInput> {
    vec![
        ExamInput::modality(Modality::Mri, 600.0, ExamQuantity::Daily(2.0)),
        ExamInput::modality(Modality::Ct, 300.0, ExamQuantity::MonthlyGoal(900.0)),
        ExamInput::custom("petct", "PET-CT", 800.0, ExamQuantity::Daily(1.5)),
    ]
}

/// Project `clinic_mix` with the default configuration.
pub fn clinic_report() -> ProjectionReport {
    Projector::builder()
        .build()
        .unwrap()
        .project(&clinic_mix())
        .unwrap()
}

/// A complete, valid render payload for `clinic_mix`.
pub fn sample_request() -> ReportRequest {
    let inputs = clinic_mix();
    let report = Projector::builder()
        .build()
        .unwrap()
        .project(&inputs)
        .unwrap();
    ReportRequest::from_report("General Hospital", &inputs, &report, None, "2026-08-05")
}

/// The same payload with both chart images attached.
pub fn sample_request_with_charts() -> ReportRequest {
    let mut request = sample_request();
    request.chart_images = Some(ChartImages {
        distribution: Some(chart_data_url()),
        growth: Some(chart_data_url()),
    });
    request
}

/// A tiny in-memory PNG wrapped as a data URL, like the chart snapshots a
/// UI would capture.
pub fn chart_data_url() -> String {
    let mut png = Vec::new();
    let image = image::DynamicImage::new_rgb8(4, 4);
    image
        .write_to(&mut png, image::ImageOutputFormat::Png)
        .unwrap();
    format!("data:image/png;base64,{}", BASE64.encode(&png))
}
