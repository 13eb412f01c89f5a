//! The projection calculator: per-exam storage volumes, aggregate totals
//! and multi-year projections with an optional margin of safety.
//!
//! [`Projector`] is a pure function of its inputs -- no I/O, no clocks, no
//! globals. Every call to [`project`](Projector::project) recomputes the
//! whole report from scratch, so identical inputs always yield identical
//! reports.
//!
//! # Example
//!
//! ```
//! use pacs_sizing::models::{ExamInput, ExamQuantity, Modality};
//! use pacs_sizing::Projector;
//!
//! let exams = vec![ExamInput::modality(
//!     Modality::Mri,
//!     600.0,
//!     ExamQuantity::Daily(2.0),
//! )];
//!
//! let projector = Projector::builder().build().unwrap();
//! let report = projector.project(&exams).unwrap();
//!
//! assert_eq!(report.exams[0].daily_mb, 1200.0);
//! assert_eq!(report.projection_for(5).unwrap().base_gb, report.total_annual_gb * 5.0);
//! ```

use std::collections::BTreeMap;

use crate::config::{CUSTOM_YEAR_RANGE, DEFAULT_YEARS};
use crate::error::{Result, SizingError};
use crate::models::exam::ExamInput;
use crate::models::projection::{ExamResult, MarginConfig, ProjectionReport, YearProjection};

// ---------------------------------------------------------------------------
// ProjectorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Projector`].
///
/// Use [`Projector::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ProjectorBuilder::build) to validate the
/// configuration.
pub struct ProjectorBuilder {
    years: Vec<u32>,
    custom_year: Option<u32>,
    margin: MarginConfig,
}

impl Default for ProjectorBuilder {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS.to_vec(),
            custom_year: None,
            margin: MarginConfig::none(),
        }
    }
}

impl ProjectorBuilder {
    /// Replace the default `[1, 5, 10, 20]` projection horizon.
    pub fn years(mut self, years: &[u32]) -> Self {
        self.years = years.to_vec();
        self
    }

    /// Add one extra user-chosen projection year (validated into `1..=50`
    /// at build time). `None` clears it.
    pub fn custom_year(mut self, year: Option<u32>) -> Self {
        self.custom_year = year;
        self
    }

    /// Apply a margin of safety to every projection.
    pub fn margin(mut self, margin: MarginConfig) -> Self {
        self.margin = margin;
        self
    }

    /// Validate the configuration and build the projector.
    pub fn build(self) -> Result<Projector> {
        if let Some(year) = self.custom_year {
            if !CUSTOM_YEAR_RANGE.contains(&year) {
                return Err(SizingError::InvalidInput(format!(
                    "custom projection year must be between {} and {}, got {year}",
                    CUSTOM_YEAR_RANGE.start(),
                    CUSTOM_YEAR_RANGE.end()
                )));
            }
        }
        if !self.margin.percentage.is_finite()
            || self.margin.percentage < 0.0
            || self.margin.percentage > 100.0
        {
            return Err(SizingError::InvalidInput(format!(
                "margin percentage must be between 0 and 100, got {}",
                self.margin.percentage
            )));
        }
        if self.years.is_empty() && self.custom_year.is_none() {
            return Err(SizingError::InvalidInput(
                "at least one projection year is required".to_string(),
            ));
        }

        let mut years = self.years;
        if let Some(year) = self.custom_year {
            years.push(year);
        }
        years.sort_unstable();
        years.dedup();

        Ok(Projector {
            years,
            custom_year: self.custom_year,
            margin: self.margin,
        })
    }
}

// ---------------------------------------------------------------------------
// Projector
// ---------------------------------------------------------------------------

/// Stateless projection calculator.
///
/// Holds only configuration (projection years and margin); all exam data
/// arrives per call.
#[derive(Debug, Clone)]
pub struct Projector {
    years: Vec<u32>,
    custom_year: Option<u32>,
    margin: MarginConfig,
}

impl Projector {
    /// Create a new builder with the default horizon and no margin.
    pub fn builder() -> ProjectorBuilder {
        ProjectorBuilder::default()
    }

    /// The year offsets this projector computes, sorted ascending.
    pub fn years(&self) -> &[u32] {
        &self.years
    }

    /// Compute the full projection report for the given exam inputs.
    ///
    /// Validation policy:
    /// - a non-finite or negative size or quantity rejects the whole
    ///   computation with [`SizingError::InvalidInput`] naming the exam;
    /// - an exam with a size but no quantity (or the reverse) rejects the
    ///   whole computation with [`SizingError::IncompleteExam`] listing
    ///   every offending exam;
    /// - an exam with neither is silently excluded;
    /// - if nothing contributes, [`SizingError::NoDataProvided`].
    pub fn project(&self, inputs: &[ExamInput]) -> Result<ProjectionReport> {
        let mut incomplete = Vec::new();
        let mut exams = Vec::with_capacity(inputs.len());

        for input in inputs {
            validate_field(input.size_mb, &input.display_name, "size")?;
            validate_field(input.quantity.raw(), &input.display_name, "quantity")?;

            let has_size = input.size_mb > 0.0;
            let has_quantity = input.quantity.daily() > 0.0;
            match (has_size, has_quantity) {
                (true, true) => exams.push(ExamResult::from_input(input)),
                (false, false) => {}
                _ => incomplete.push(input.display_name.clone()),
            }
        }

        if !incomplete.is_empty() {
            return Err(SizingError::IncompleteExam(format!(
                "size and quantity must both be filled in for: {}",
                incomplete.join(", ")
            )));
        }
        if exams.is_empty() {
            return Err(SizingError::NoDataProvided);
        }

        let total_daily_mb: f64 = exams.iter().map(|e| e.daily_mb).sum();
        let total_monthly_mb: f64 = exams.iter().map(|e| e.monthly_mb).sum();
        let total_monthly_gb: f64 = exams.iter().map(|e| e.monthly_gb).sum();
        let total_annual_gb: f64 = exams.iter().map(|e| e.annual_gb).sum();

        let projections: BTreeMap<u32, YearProjection> = self
            .years
            .iter()
            .map(|&year| {
                let base_gb = total_annual_gb * f64::from(year);
                let margin_gb = self.margin.margin_for(base_gb, year);
                (
                    year,
                    YearProjection {
                        year,
                        base_gb,
                        margin_gb,
                        final_gb: base_gb + margin_gb,
                    },
                )
            })
            .collect();

        Ok(ProjectionReport {
            exams,
            total_daily_mb,
            total_monthly_mb,
            total_monthly_gb,
            total_annual_gb,
            margin: self.margin,
            projections,
            custom_year: self.custom_year,
        })
    }
}

impl Default for Projector {
    fn default() -> Self {
        // The default configuration is always valid.
        Projector {
            years: DEFAULT_YEARS.to_vec(),
            custom_year: None,
            margin: MarginConfig::none(),
        }
    }
}

fn validate_field(value: f64, exam: &str, field: &str) -> Result<()> {
    if value.is_nan() || !value.is_finite() {
        return Err(SizingError::InvalidInput(format!(
            "{field} for {exam} is not a number"
        )));
    }
    if value < 0.0 {
        return Err(SizingError::InvalidInput(format!(
            "{field} for {exam} must not be negative"
        )));
    }
    Ok(())
}
