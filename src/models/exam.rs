use serde::{Deserialize, Serialize};

use crate::config::DAYS_PER_MONTH;

// ---------------------------------------------------------------------------
// Modality — The built-in exam modality catalog
// ---------------------------------------------------------------------------

/// Imaging modality with a stable wire identifier and reference volume data.
///
/// The reference daily counts are the defaults a UI pre-fills quantity
/// fields with; any of them can be overridden per [`ExamInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Mri,
    Ct,
    Xray,
    Ultrasound,
    Densitometry,
    Hemodynamics,
    Mammography,
}

impl Modality {
    /// Every built-in modality, in display order.
    pub const ALL: [Modality; 7] = [
        Modality::Mri,
        Modality::Ct,
        Modality::Xray,
        Modality::Ultrasound,
        Modality::Densitometry,
        Modality::Hemodynamics,
        Modality::Mammography,
    ];

    /// Stable identifier used as the key in `examData` payloads.
    pub fn id(self) -> &'static str {
        match self {
            Modality::Mri => "mri",
            Modality::Ct => "ct",
            Modality::Xray => "xray",
            Modality::Ultrasound => "ultrasound",
            Modality::Densitometry => "densitometry",
            Modality::Hemodynamics => "hemodynamics",
            Modality::Mammography => "mammography",
        }
    }

    /// Human-readable name shown in tables and reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Modality::Mri => "Magnetic Resonance Imaging",
            Modality::Ct => "Computed Tomography",
            Modality::Xray => "Digital X-ray",
            Modality::Ultrasound => "Ultrasound",
            Modality::Densitometry => "Bone Densitometry",
            Modality::Hemodynamics => "Hemodynamics",
            Modality::Mammography => "Digital Mammography",
        }
    }

    /// Reference exams-per-day count for a typical mid-size unit.
    pub fn reference_daily_count(self) -> f64 {
        match self {
            Modality::Mri => 10.0,
            Modality::Ct => 65.0,
            Modality::Xray => 60.0,
            Modality::Ultrasound => 50.0,
            Modality::Densitometry => 10.0,
            Modality::Hemodynamics => 10.0,
            Modality::Mammography => 20.0,
        }
    }

    /// Look up a modality by its wire identifier.
    pub fn from_id(id: &str) -> Option<Modality> {
        Modality::ALL.iter().copied().find(|m| m.id() == id)
    }
}

// ---------------------------------------------------------------------------
// ExamQuantity
// ---------------------------------------------------------------------------

/// Exam quantity as entered by the user.
///
/// A monthly goal and a daily count are interconvertible at 30 days per
/// month; the calculator always works on the daily figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExamQuantity {
    /// Exams performed per day.
    Daily(f64),
    /// Target exams per month.
    MonthlyGoal(f64),
}

impl ExamQuantity {
    /// The quantity expressed as exams per day.
    pub fn daily(self) -> f64 {
        match self {
            ExamQuantity::Daily(count) => count,
            ExamQuantity::MonthlyGoal(goal) => goal / DAYS_PER_MONTH,
        }
    }

    /// The quantity expressed as exams per month.
    pub fn monthly(self) -> f64 {
        match self {
            ExamQuantity::Daily(count) => count * DAYS_PER_MONTH,
            ExamQuantity::MonthlyGoal(goal) => goal,
        }
    }

    /// The raw value as entered, before any conversion.
    pub fn raw(self) -> f64 {
        match self {
            ExamQuantity::Daily(count) => count,
            ExamQuantity::MonthlyGoal(goal) => goal,
        }
    }
}

// ---------------------------------------------------------------------------
// ExamInput — One row of the estimation form
// ---------------------------------------------------------------------------

/// A single exam type as configured by the user: identifier, display name,
/// average file size and quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamInput {
    pub id: String,
    pub display_name: String,
    /// Average file size of one exam, in megabytes.
    pub size_mb: f64,
    pub quantity: ExamQuantity,
    /// True for user-defined exam types outside the built-in catalog.
    pub custom: bool,
}

impl ExamInput {
    /// Build an input row for a built-in modality.
    pub fn modality(modality: Modality, size_mb: f64, quantity: ExamQuantity) -> Self {
        Self {
            id: modality.id().to_string(),
            display_name: modality.display_name().to_string(),
            size_mb,
            quantity,
            custom: false,
        }
    }

    /// Build an input row for a user-defined exam type.
    pub fn custom(
        id: impl Into<String>,
        display_name: impl Into<String>,
        size_mb: f64,
        quantity: ExamQuantity,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            size_mb,
            quantity,
            custom: true,
        }
    }
}
