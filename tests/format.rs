use stock_dashboard_wasm::presentation::components::financial_summary::{
    format_compact, format_percent, format_ratio, per_hint, roe_hint,
};

#[test]
fn compact_numbers_pick_the_right_magnitude() {
    assert_eq!(format_compact(Some(5e12)), "5.00T");
    assert_eq!(format_compact(Some(2_340_000_000.0)), "2.34B");
    assert_eq!(format_compact(Some(12_500_000.0)), "12.50M");
    assert_eq!(format_compact(Some(1_234.0)), "1.23K");
    assert_eq!(format_compact(Some(999.4)), "999.40");
}

#[test]
fn negative_values_keep_their_sign() {
    assert_eq!(format_compact(Some(-2_500_000_000.0)), "-2.50B");
}

#[test]
fn missing_values_render_na() {
    assert_eq!(format_compact(None), "N/A");
    assert_eq!(format_ratio(None), "N/A");
    assert_eq!(format_percent(None), "N/A");
}

#[test]
fn ratios_and_percents_use_two_decimals() {
    assert_eq!(format_ratio(Some(28.456)), "28.46");
    assert_eq!(format_percent(Some(14.7)), "14.70%");
}

#[test]
fn pe_hint_brackets() {
    assert_eq!(per_hint(12.0), "Undervalued");
    assert_eq!(per_hint(20.0), "Fair");
    assert_eq!(per_hint(30.0), "Overvalued");
    // Boundaries are inclusive of "Fair"
    assert_eq!(per_hint(15.0), "Fair");
    assert_eq!(per_hint(25.0), "Fair");
}

#[test]
fn roe_hint_brackets() {
    assert_eq!(roe_hint(20.0), "Strong");
    assert_eq!(roe_hint(10.0), "Average");
    assert_eq!(roe_hint(3.0), "Weak");
}
