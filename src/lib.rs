//! Storage-capacity estimation toolkit for PACS imaging archives.
//!
//! Turns per-modality exam counts and average file sizes into projected
//! monthly and annual storage volumes, with multi-year projections and an
//! optional fixed or progressive margin of safety. Computed results can be
//! rendered into a PDF report locally or requested from a running report
//! server.
//!
//! # Quick start
//!
//! ```
//! use pacs_sizing::models::{ExamInput, ExamQuantity, MarginConfig, Modality};
//! use pacs_sizing::Projector;
//!
//! let exams = vec![
//!     ExamInput::modality(Modality::Mri, 600.0, ExamQuantity::Daily(2.0)),
//!     ExamInput::modality(Modality::Ct, 300.0, ExamQuantity::MonthlyGoal(900.0)),
//! ];
//!
//! let projector = Projector::builder()
//!     .margin(MarginConfig::fixed(20.0))
//!     .custom_year(Some(7))
//!     .build()
//!     .unwrap();
//!
//! let report = projector.project(&exams).unwrap();
//! let five_years = report.projection_for(5).unwrap();
//! assert!(five_years.final_gb > five_years.base_gb);
//! ```

pub mod calculator;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod render;

pub use calculator::{Projector, ProjectorBuilder};
pub use client::ReportClient;
pub use error::{Result, SizingError};
pub use format::format_storage;
pub use render::{PdfReportRenderer, ReportRenderer};
