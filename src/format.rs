//! Storage-value formatting shared by the UI figures and the PDF report.
//!
//! The rule is deliberately simple and must stay bit-for-bit stable:
//! values of 1024 GB and above display as TB, and the displayed number is
//! rounded to 0 decimal places once it reaches 100 in its display unit,
//! otherwise to 2.

use crate::config::GB_PER_TB;

/// Format a storage volume given in gigabytes.
///
/// ```
/// use pacs_sizing::format::format_storage;
///
/// assert_eq!(format_storage(50.0), "50.00 GB");
/// assert_eq!(format_storage(150.0), "150 GB");
/// assert_eq!(format_storage(1024.0), "1.00 TB");
/// assert_eq!(format_storage(204800.0), "200 TB");
/// ```
pub fn format_storage(gb: f64) -> String {
    if gb >= GB_PER_TB {
        let tb = gb / GB_PER_TB;
        if tb >= 100.0 {
            format!("{tb:.0} TB")
        } else {
            format!("{tb:.2} TB")
        }
    } else if gb >= 100.0 {
        format!("{gb:.0} GB")
    } else {
        format!("{gb:.2} GB")
    }
}

/// Format a megabyte figure for table cells (two decimal places).
pub fn format_mb(mb: f64) -> String {
    format!("{mb:.2} MB")
}

/// Format a gigabyte figure for table cells (two decimal places, no unit
/// promotion — report tables keep one unit per column).
pub fn format_gb(gb: f64) -> String {
    format!("{gb:.2} GB")
}

/// Format an exams-per-day quantity (one decimal place).
pub fn format_quantity(count: f64) -> String {
    format!("{count:.1}")
}
