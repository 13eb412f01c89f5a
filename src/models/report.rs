//! Wire types for the `POST /generate-pdf` contract.
//!
//! Field names follow the original camelCase payload so the server stays
//! compatible with any client that already speaks this schema. Storage
//! values inside [`ResultsSummary`] are pre-formatted strings: the PDF must
//! show exactly the figures the user saw on screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SizingError};
use crate::format::format_storage;
use crate::models::exam::{ExamInput, ExamQuantity, Modality};
use crate::models::projection::{MarginType, ProjectionReport};

// ---------------------------------------------------------------------------
// ExamData — Per-exam payload entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Average file size in MB.
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_goal: Option<f64>,
    #[serde(default)]
    pub daily_quantity: f64,
    #[serde(default)]
    pub is_custom: bool,
}

impl ExamData {
    /// Reconstruct the calculator input this entry describes.
    ///
    /// The display name falls back to the built-in catalog for known
    /// identifiers, then to the identifier itself.
    pub fn to_input(&self, id: &str) -> ExamInput {
        let display_name = match (&self.display_name, Modality::from_id(id)) {
            (Some(name), _) => name.clone(),
            (None, Some(modality)) => modality.display_name().to_string(),
            (None, None) => id.to_string(),
        };
        let quantity = if self.daily_quantity > 0.0 {
            ExamQuantity::Daily(self.daily_quantity)
        } else if let Some(goal) = self.monthly_goal {
            ExamQuantity::MonthlyGoal(goal)
        } else {
            ExamQuantity::Daily(self.daily_quantity)
        };
        ExamInput {
            id: id.to_string(),
            display_name,
            size_mb: self.size,
            quantity,
            custom: self.is_custom,
        }
    }
}

// ---------------------------------------------------------------------------
// ResultsSummary — Formatted projection figures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub annual: String,
    pub year1: String,
    pub year5: String,
    pub year10: String,
    pub year20: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomProjection>,
    #[serde(default)]
    pub margin_applied: bool,
    #[serde(default)]
    pub margin_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_type: Option<MarginType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProjection {
    pub years: u32,
    pub value: String,
}

impl ResultsSummary {
    /// Derive the formatted summary from a computed report.
    ///
    /// Uses the same formatter the UI uses, so report and screen always
    /// agree on the displayed figures.
    pub fn from_report(report: &ProjectionReport) -> Self {
        Self {
            annual: format_storage(report.total_annual_gb),
            year1: format_storage(report.final_for(1)),
            year5: format_storage(report.final_for(5)),
            year10: format_storage(report.final_for(10)),
            year20: format_storage(report.final_for(20)),
            custom: report.custom_year.map(|years| CustomProjection {
                years,
                value: format_storage(report.final_for(years)),
            }),
            margin_applied: report.margin.apply,
            margin_percentage: report.margin.percentage,
            margin_type: report.margin.apply.then_some(report.margin.margin_type),
        }
    }
}

// ---------------------------------------------------------------------------
// ChartImages
// ---------------------------------------------------------------------------

/// Chart snapshots captured by the UI, as PNG data URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
}

// ---------------------------------------------------------------------------
// ReportRequest — Full render payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub unit_name: String,
    pub exam_data: BTreeMap<String, ExamData>,
    pub results: ResultsSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_images: Option<ChartImages>,
    pub date: String,
}

impl ReportRequest {
    /// Assemble a render payload from a computed report.
    pub fn from_report(
        unit_name: impl Into<String>,
        inputs: &[ExamInput],
        report: &ProjectionReport,
        chart_images: Option<ChartImages>,
        date: impl Into<String>,
    ) -> Self {
        let exam_data = inputs
            .iter()
            .map(|input| {
                (
                    input.id.clone(),
                    ExamData {
                        display_name: Some(input.display_name.clone()),
                        size: input.size_mb,
                        monthly_goal: Some(input.quantity.monthly().round()),
                        daily_quantity: input.quantity.daily(),
                        is_custom: input.custom,
                    },
                )
            })
            .collect();
        Self {
            unit_name: unit_name.into(),
            exam_data,
            results: ResultsSummary::from_report(report),
            chart_images,
            date: date.into(),
        }
    }

    /// Check the payload carries everything a render needs.
    pub fn validate(&self) -> Result<()> {
        if self.unit_name.trim().is_empty() {
            return Err(SizingError::MissingUnitName);
        }
        if self.exam_data.is_empty() {
            return Err(SizingError::NoDataProvided);
        }
        Ok(())
    }

    /// Calculator inputs reconstructed from the payload entries.
    pub fn exam_inputs(&self) -> Vec<ExamInput> {
        self.exam_data
            .iter()
            .map(|(id, data)| data.to_input(id))
            .collect()
    }
}
