//! Integration tests for the unit table and magnitude parsing.
//!
//! Conversions, keyword lookup, suffix splitting, and the millimeter
//! canonical form shared by every coordinate in the system.

use platine_foundation::{ErrorKind, UNITS, Unit, convert, split_unit_suffix, to_millimeters};

// =============================================================================
// The Unit Table
// =============================================================================

#[test]
fn table_order_is_stable() {
    assert_eq!(
        UNITS,
        [Unit::Micron, Unit::Millimeter, Unit::Mil, Unit::Inch]
    );
}

#[test]
fn codes_round_trip_through_lookup() {
    for unit in UNITS {
        assert_eq!(Unit::from_code(unit.code()), Some(unit));
    }
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(Unit::from_code("mil"), Some(Unit::Mil));
    assert_eq!(Unit::from_code("MIL"), None);
    assert_eq!(Unit::from_code("Inch"), None);
    assert_eq!(Unit::from_code("cm"), None);
}

#[test]
fn display_matches_the_code() {
    assert_eq!(format!("{}", Unit::Micron), "mic");
    assert_eq!(format!("{}", Unit::Millimeter), "mm");
    assert_eq!(format!("{}", Unit::Mil), "mil");
    assert_eq!(format!("{}", Unit::Inch), "inch");
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn same_unit_conversion_is_the_identity() {
    let value = 123.456_789;
    assert_eq!(convert(value, Unit::Inch, Unit::Inch), value);
    assert_eq!(convert(value, Unit::Micron, Unit::Micron), value);
}

#[test]
fn conversions_agree_with_the_inch_definition() {
    // One inch is exactly 25.4 mm; everything else derives from that.
    assert!((convert(1.0, Unit::Inch, Unit::Millimeter) - 25.4).abs() < 1e-12);
    assert!((convert(1.0, Unit::Mil, Unit::Millimeter) - 0.0254).abs() < 1e-12);
    assert!((convert(1.0, Unit::Millimeter, Unit::Micron) - 1000.0).abs() < 1e-9);
    assert!((convert(100.0, Unit::Mil, Unit::Inch) - 0.1).abs() < 1e-12);
}

#[test]
fn cross_unit_round_trip_is_tight() {
    let start = 2.54;
    let there = convert(start, Unit::Millimeter, Unit::Mil);
    assert!((there - 100.0).abs() < 1e-9);
    let back = convert(there, Unit::Mil, Unit::Millimeter);
    assert!((back - start).abs() < 1e-12);
}

#[test]
fn negative_magnitudes_convert_like_positive_ones() {
    assert!((convert(-0.5, Unit::Inch, Unit::Millimeter) + 12.7).abs() < 1e-12);
}

// =============================================================================
// Suffix Splitting
// =============================================================================

#[test]
fn suffixes_split_off_the_magnitude() {
    assert_eq!(split_unit_suffix("2.54mm"), Some(("2.54", Unit::Millimeter)));
    assert_eq!(split_unit_suffix("0.1inch"), Some(("0.1", Unit::Inch)));
    assert_eq!(split_unit_suffix("2540mic"), Some(("2540", Unit::Micron)));
}

#[test]
fn longer_suffixes_are_tried_first() {
    assert_eq!(split_unit_suffix("5mil"), Some(("5", Unit::Mil)));
    assert_eq!(split_unit_suffix("5mm"), Some(("5", Unit::Millimeter)));
}

#[test]
fn unsuffixed_tokens_split_to_none() {
    assert_eq!(split_unit_suffix("2.54"), None);
    assert_eq!(split_unit_suffix("wide"), None);
}

#[test]
fn suffix_matching_is_case_sensitive() {
    assert_eq!(split_unit_suffix("5MM"), None);
    assert_eq!(split_unit_suffix("5Mil"), None);
}

// =============================================================================
// Parsing to Millimeters
// =============================================================================

#[test]
fn bare_numbers_are_already_millimeters() {
    assert!((to_millimeters("2.54").unwrap() - 2.54).abs() < 1e-12);
    assert!((to_millimeters("-1").unwrap() + 1.0).abs() < 1e-12);
}

#[test]
fn suffixed_magnitudes_convert_on_parse() {
    assert!((to_millimeters("100mil").unwrap() - 2.54).abs() < 1e-12);
    assert!((to_millimeters("0.1inch").unwrap() - 2.54).abs() < 1e-12);
    assert!((to_millimeters("2540mic").unwrap() - 2.54).abs() < 1e-9);
}

#[test]
fn unknown_suffix_reports_the_whole_token() {
    let err = to_millimeters("5furlong").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidNumber(text) if text == "5furlong"));
}

#[test]
fn bad_magnitude_under_a_good_suffix_is_rejected() {
    let err = to_millimeters("1.2.3mm").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidNumber(text) if text == "1.2.3mm"));
}

#[test]
fn a_lone_suffix_is_not_a_number() {
    assert!(to_millimeters("inch").is_err());
    assert!(to_millimeters("mm").is_err());
}
