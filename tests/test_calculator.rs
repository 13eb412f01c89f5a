//! Core projection arithmetic tests.

mod common;

use pacs_sizing::models::{ExamInput, ExamQuantity, Modality};
use pacs_sizing::Projector;

// ---------------------------------------------------------------------------
// per-exam arithmetic
// ---------------------------------------------------------------------------

#[test]
fn daily_monthly_annual_identities() {
    let report = Projector::builder()
        .build()
        .unwrap()
        .project(&common::mri_only())
        .unwrap();

    let mri = &report.exams[0];
    assert_eq!(mri.daily_mb, 600.0 * 2.0);
    assert_eq!(mri.monthly_mb, mri.daily_mb * 30.0);
    assert_eq!(mri.annual_gb, mri.daily_mb * 365.0 / 1024.0);
    assert_eq!(mri.monthly_gb, mri.monthly_mb / 1024.0);
}

#[test]
fn end_to_end_scenario_mri_only() {
    let report = Projector::builder()
        .build()
        .unwrap()
        .project(&common::mri_only())
        .unwrap();

    assert_eq!(report.total_daily_mb, 1200.0);
    assert_eq!(report.total_monthly_mb, 36000.0);
    assert_eq!(report.total_annual_gb, 1200.0 * 365.0 / 1024.0);

    // No margin: final equals base equals annual x years.
    let one = report.projection_for(1).unwrap();
    assert_eq!(one.final_gb, one.base_gb);
    assert_eq!(one.base_gb, report.total_annual_gb);
    let five = report.projection_for(5).unwrap();
    assert_eq!(five.final_gb, 5.0 * report.total_annual_gb);
}

#[test]
fn monthly_goal_converts_at_thirty_days() {
    let inputs = vec![ExamInput::modality(
        Modality::Ct,
        300.0,
        ExamQuantity::MonthlyGoal(900.0),
    )];
    let report = Projector::builder().build().unwrap().project(&inputs).unwrap();

    let ct = &report.exams[0];
    assert_eq!(ct.daily_quantity, 30.0);
    assert_eq!(ct.monthly_goal, 900.0);
    assert_eq!(ct.daily_mb, 300.0 * 30.0);
}

#[test]
fn totals_are_sums_over_contributing_exams() {
    let report = common::clinic_report();

    assert_eq!(report.exams.len(), 3);
    let daily: f64 = report.exams.iter().map(|e| e.daily_mb).sum();
    let annual: f64 = report.exams.iter().map(|e| e.annual_gb).sum();
    assert_eq!(report.total_daily_mb, daily);
    assert_eq!(report.total_annual_gb, annual);
    // The canonical annual total is the 365-day formula at both levels.
    assert!((report.total_annual_gb - daily * 365.0 / 1024.0).abs() < 1e-9);
}

#[test]
fn untouched_exams_are_excluded_silently() {
    let mut inputs = common::mri_only();
    inputs.push(ExamInput::modality(
        Modality::Xray,
        0.0,
        ExamQuantity::Daily(0.0),
    ));
    let report = Projector::builder().build().unwrap().project(&inputs).unwrap();

    assert_eq!(report.exams.len(), 1);
    assert_eq!(report.exams[0].id, "mri");
}

// ---------------------------------------------------------------------------
// purity
// ---------------------------------------------------------------------------

#[test]
fn projection_is_idempotent() {
    let projector = Projector::builder().build().unwrap();
    let inputs = common::clinic_mix();

    let first = projector.project(&inputs).unwrap();
    let second = projector.project(&inputs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn volumes_are_monotonic_in_each_input() {
    let projector = Projector::builder().build().unwrap();
    let base = projector.project(&common::mri_only()).unwrap();

    let bigger_size = vec![ExamInput::modality(
        Modality::Mri,
        700.0,
        ExamQuantity::Daily(2.0),
    )];
    let more_exams = vec![ExamInput::modality(
        Modality::Mri,
        600.0,
        ExamQuantity::Daily(3.0),
    )];

    let by_size = projector.project(&bigger_size).unwrap();
    let by_count = projector.project(&more_exams).unwrap();
    assert!(by_size.total_annual_gb > base.total_annual_gb);
    assert!(by_count.total_annual_gb > base.total_annual_gb);
}

// ---------------------------------------------------------------------------
// projection years
// ---------------------------------------------------------------------------

#[test]
fn default_horizon_is_1_5_10_20() {
    let report = common::clinic_report();
    let years: Vec<u32> = report.projections.keys().copied().collect();
    assert_eq!(years, vec![1, 5, 10, 20]);
}

#[test]
fn custom_year_joins_the_horizon() {
    let projector = Projector::builder().custom_year(Some(7)).build().unwrap();
    let report = projector.project(&common::mri_only()).unwrap();

    assert_eq!(report.custom_year, Some(7));
    let seven = report.projection_for(7).unwrap();
    assert_eq!(seven.base_gb, report.total_annual_gb * 7.0);
}

#[test]
fn custom_year_overlapping_a_default_is_deduplicated() {
    let projector = Projector::builder().custom_year(Some(10)).build().unwrap();
    let report = projector.project(&common::mri_only()).unwrap();
    let years: Vec<u32> = report.projections.keys().copied().collect();
    assert_eq!(years, vec![1, 5, 10, 20]);
}
