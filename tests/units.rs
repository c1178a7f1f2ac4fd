use pixelruler::units::*;

#[test]
fn conversions_match_definition() {
    assert_eq!(to_inches(96.0, 96.0), 1.0);
    assert_eq!(to_cm(96.0, 96.0), 2.54);
    assert_eq!(to_inches(0.0, 300.0), 0.0);
    assert!((to_cm(100.0, 96.0) - 2.645833).abs() < 1e-5);
}

#[test]
fn parse_dpi_accepts_plain_numbers() {
    assert_eq!(parse_dpi("96"), Dpi::Value(96.0));
    assert_eq!(parse_dpi("  300.5 "), Dpi::Value(300.5));
}

#[test]
fn parse_dpi_takes_leading_float_prefix() {
    assert_eq!(parse_dpi("72dpi"), Dpi::Value(72.0));
    assert_eq!(parse_dpi("1.5e2x"), Dpi::Value(150.0));
}

#[test]
fn parse_dpi_falls_back_on_unparsable_input() {
    assert_eq!(parse_dpi(""), Dpi::Value(DEFAULT_DPI));
    assert_eq!(parse_dpi("abc"), Dpi::Value(DEFAULT_DPI));
    assert_eq!(parse_dpi("dpi96"), Dpi::Value(DEFAULT_DPI));
}

#[test]
fn parse_dpi_keeps_explicit_non_positive_values_invalid() {
    assert_eq!(parse_dpi("0"), Dpi::Invalid("0".to_string()));
    assert_eq!(parse_dpi("-5"), Dpi::Invalid("-5".to_string()));
    assert_eq!(parse_dpi("-0.1"), Dpi::Invalid("-0.1".to_string()));
}

#[test]
fn format_pixels_uses_whole_pixels() {
    assert_eq!(format_pixels(100.0, 50.0), "Pixels: 100 W x 50 H");
    assert_eq!(format_pixels(99.6, 0.0), "Pixels: 100 W x 0 H");
}

#[test]
fn format_physical_rounds_to_two_decimals() {
    let dpi = parse_dpi("96");
    assert_eq!(
        format_physical(Unit::Cm, 200.0, 100.0, &dpi),
        "CM (at 96 DPI): 5.29 W x 2.65 H"
    );
    assert_eq!(
        format_physical(Unit::In, 200.0, 100.0, &dpi),
        "IN (at 96 DPI): 2.08 W x 1.04 H"
    );
}

#[test]
fn format_physical_uses_fallback_dpi_for_unparsable_text() {
    let dpi = parse_dpi("abc");
    assert_eq!(
        format_physical(Unit::Cm, 96.0, 96.0, &dpi),
        "CM (at 96 DPI): 2.54 W x 2.54 H"
    );
}

#[test]
fn format_physical_echoes_invalid_dpi_text() {
    let dpi = parse_dpi("-5");
    assert_eq!(
        format_physical(Unit::Cm, 100.0, 50.0, &dpi),
        "CM (at -5 DPI): Invalid DPI"
    );
    assert_eq!(
        format_physical(Unit::In, 100.0, 50.0, &dpi),
        "IN (at -5 DPI): Invalid DPI"
    );
}

#[test]
fn format_percent_rounds_to_one_decimal() {
    assert_eq!(
        format_percent(100.0, 50.0, 200.0, 100.0),
        "% of Original: 50.0% W x 50.0% H"
    );
    assert_eq!(
        format_percent(100.0, 33.0, 300.0, 100.0),
        "% of Original: 33.3% W x 33.0% H"
    );
}

#[test]
fn format_percent_blank_when_any_dimension_is_zero() {
    assert_eq!(format_percent(0.0, 50.0, 200.0, 100.0), "");
    assert_eq!(format_percent(100.0, 0.0, 200.0, 100.0), "");
    assert_eq!(format_percent(100.0, 50.0, 0.0, 100.0), "");
    assert_eq!(format_percent(100.0, 50.0, 200.0, 0.0), "");
}
