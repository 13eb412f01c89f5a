use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Port the report server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8081;

/// Base URL the report client targets by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Year offsets every projection includes by default.
pub const DEFAULT_YEARS: [u32; 4] = [1, 5, 10, 20];

/// Accepted range for a user-supplied custom projection year.
pub const CUSTOM_YEAR_RANGE: RangeInclusive<u32> = 1..=50;

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MB_PER_GB: f64 = 1024.0;
pub const GB_PER_TB: f64 = 1024.0;

/// Attachment file name used by the report server for a given unit.
///
/// Whitespace runs in the unit name are collapsed to single underscores so
/// the name is safe in a `Content-Disposition` header.
pub fn report_file_name(unit_name: &str) -> String {
    format!("relatorio_pacs_{}.pdf", underscore(unit_name))
}

/// File name the client uses when saving a fetched report to disk.
pub fn download_file_name(unit_name: &str, date: &str) -> String {
    format!(
        "relatorio_pacs_{}_{}.pdf",
        underscore(unit_name),
        underscore(date)
    )
}

fn underscore(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Directory where fetched reports are saved when the caller does not pick
/// one (the platform download directory, falling back to the working
/// directory).
pub fn default_download_dir() -> PathBuf {
    if let Some(downloads) = dirs::download_dir() {
        downloads
    } else {
        PathBuf::from(".")
    }
}
