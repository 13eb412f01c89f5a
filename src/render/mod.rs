//! Report rendering behind a narrow byte-oriented interface.
//!
//! The calculator core knows nothing about document technology; everything
//! downstream of [`ReportRenderer::render`] is replaceable.

pub mod pdf;

pub use pdf::PdfReportRenderer;

use crate::error::Result;
use crate::models::report::ReportRequest;

/// Turns a validated render payload into finished document bytes.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, request: &ReportRequest) -> Result<Vec<u8>>;
}
