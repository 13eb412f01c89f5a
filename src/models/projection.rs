use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{DAYS_PER_MONTH, DAYS_PER_YEAR, MB_PER_GB};
use crate::models::exam::ExamInput;

// ---------------------------------------------------------------------------
// ExamResult — Derived storage volumes for one exam type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub display_name: String,
    pub custom: bool,
    pub size_mb: f64,
    pub monthly_goal: f64,
    pub daily_quantity: f64,
    pub daily_mb: f64,
    pub monthly_mb: f64,
    pub monthly_gb: f64,
    pub annual_gb: f64,
}

impl ExamResult {
    /// Derive the storage volumes for one configured exam type.
    ///
    /// This is the single place the per-exam formulas live; the calculator
    /// and the report renderer both go through it.
    pub fn from_input(input: &ExamInput) -> Self {
        let daily_quantity = input.quantity.daily();
        let daily_mb = input.size_mb * daily_quantity;
        let monthly_mb = daily_mb * DAYS_PER_MONTH;
        Self {
            id: input.id.clone(),
            display_name: input.display_name.clone(),
            custom: input.custom,
            size_mb: input.size_mb,
            monthly_goal: input.quantity.monthly().round(),
            daily_quantity,
            daily_mb,
            monthly_mb,
            monthly_gb: monthly_mb / MB_PER_GB,
            annual_gb: daily_mb * DAYS_PER_YEAR / MB_PER_GB,
        }
    }
}

// ---------------------------------------------------------------------------
// MarginConfig
// ---------------------------------------------------------------------------

/// How the margin percentage scales over the projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginType {
    /// The same percentage applies to every projected year.
    Fixed,
    /// The percentage is multiplied by the year number before applying.
    Progressive,
}

/// Optional margin of safety added on top of raw projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginConfig {
    pub apply: bool,
    /// Percentage in `0..=100`.
    pub percentage: f64,
    #[serde(rename = "type")]
    pub margin_type: MarginType,
}

impl MarginConfig {
    /// No margin: projections equal their base values.
    pub fn none() -> Self {
        Self {
            apply: false,
            percentage: 0.0,
            margin_type: MarginType::Fixed,
        }
    }

    /// A flat percentage applied to every projected year.
    pub fn fixed(percentage: f64) -> Self {
        Self {
            apply: true,
            percentage,
            margin_type: MarginType::Fixed,
        }
    }

    /// A percentage that grows with the year number.
    pub fn progressive(percentage: f64) -> Self {
        Self {
            apply: true,
            percentage,
            margin_type: MarginType::Progressive,
        }
    }

    /// Margin volume for a projection base at the given year offset.
    pub fn margin_for(&self, base_gb: f64, year: u32) -> f64 {
        if !self.apply {
            return 0.0;
        }
        match self.margin_type {
            MarginType::Fixed => base_gb * self.percentage / 100.0,
            MarginType::Progressive => base_gb * self.percentage * f64::from(year) / 100.0,
        }
    }
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self::none()
    }
}

// ---------------------------------------------------------------------------
// YearProjection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    pub year: u32,
    pub base_gb: f64,
    pub margin_gb: f64,
    pub final_gb: f64,
}

// ---------------------------------------------------------------------------
// ProjectionReport — Full output of one calculator run
// ---------------------------------------------------------------------------

/// Everything a single "calculate" action produces: the per-exam
/// breakdown, aggregate totals and the per-year projections.
///
/// Recomputed from scratch on every run; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    /// Contributing exams, in input order.
    pub exams: Vec<ExamResult>,
    pub total_daily_mb: f64,
    pub total_monthly_mb: f64,
    pub total_monthly_gb: f64,
    /// Canonical 365-day annual total (sum of the per-exam annual figures).
    pub total_annual_gb: f64,
    pub margin: MarginConfig,
    /// Projections keyed by year offset.
    pub projections: BTreeMap<u32, YearProjection>,
    pub custom_year: Option<u32>,
}

impl ProjectionReport {
    /// The projection for a given year offset, if it was requested.
    pub fn projection_for(&self, year: u32) -> Option<&YearProjection> {
        self.projections.get(&year)
    }

    /// Final projected volume for an arbitrary year offset, computed with
    /// the report's margin configuration when the year was not part of the
    /// requested set.
    pub fn final_for(&self, year: u32) -> f64 {
        if let Some(projection) = self.projections.get(&year) {
            return projection.final_gb;
        }
        let base = self.total_annual_gb * f64::from(year);
        base + self.margin.margin_for(base, year)
    }
}
