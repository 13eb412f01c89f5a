//! Storage formatting parity: the exact strings shown on screen and in the
//! report.

use pacs_sizing::format::{format_gb, format_mb, format_quantity, format_storage};

#[test]
fn small_values_keep_two_decimals() {
    assert_eq!(format_storage(0.0), "0.00 GB");
    assert_eq!(format_storage(12.85), "12.85 GB");
    assert_eq!(format_storage(50.0), "50.00 GB");
    assert_eq!(format_storage(99.99), "99.99 GB");
}

#[test]
fn values_from_one_hundred_drop_decimals() {
    assert_eq!(format_storage(100.0), "100 GB");
    assert_eq!(format_storage(150.0), "150 GB");
    assert_eq!(format_storage(1023.0), "1023 GB");
}

#[test]
fn terabyte_threshold_at_1024_gb() {
    assert_eq!(format_storage(1024.0), "1.00 TB");
    assert_eq!(format_storage(2560.0), "2.50 TB");
    assert_eq!(format_storage(99.0 * 1024.0), "99.00 TB");
}

#[test]
fn large_terabyte_values_drop_decimals() {
    assert_eq!(format_storage(100.0 * 1024.0), "100 TB");
    assert_eq!(format_storage(204800.0), "200 TB");
}

#[test]
fn table_cell_helpers() {
    assert_eq!(format_mb(1200.0), "1200.00 MB");
    assert_eq!(format_gb(35.15625), "35.16 GB");
    assert_eq!(format_quantity(30.0), "30.0");
    assert_eq!(format_quantity(1.5), "1.5");
}
