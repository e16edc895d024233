use stock_dashboard_wasm::domain::stocks::{Category, Grade, Outlook, Score, Ticker};
use strum::IntoEnumIterator;

#[test]
fn ticker_normalizes_to_uppercase() {
    let ticker = Ticker::new("aapl".to_string()).unwrap();
    assert_eq!(ticker.value(), "AAPL");
    assert_eq!(Ticker::from(" msft "), Ticker::from("MSFT"));
}

#[test]
fn empty_ticker_is_rejected() {
    assert!(Ticker::new("".to_string()).is_err());
    assert!(Ticker::new("   ".to_string()).is_err());
}

#[test]
fn score_fraction_maps_to_unit_scale() {
    assert_eq!(Score::new(75).fraction(), 0.75);
    assert_eq!(Score::new(0).fraction(), 0.0);
    // Above the documented range the fraction exceeds 1.0 on purpose
    assert_eq!(Score::new(150).fraction(), 1.5);
}

#[test]
fn grades_round_trip_with_wire_spellings() {
    for (grade, wire) in [
        (Grade::APlus, "\"A+\""),
        (Grade::A, "\"A\""),
        (Grade::BPlus, "\"B+\""),
        (Grade::CPlus, "\"C+\""),
        (Grade::F, "\"F\""),
    ] {
        assert_eq!(serde_json::to_string(&grade).unwrap(), wire);
        assert_eq!(serde_json::from_str::<Grade>(wire).unwrap(), grade);
    }
}

#[test]
fn grade_display_matches_wire_spelling() {
    assert_eq!(Grade::APlus.to_string(), "A+");
    assert_eq!("B+".parse::<Grade>().unwrap(), Grade::BPlus);
}

#[test]
fn outlook_round_trips_with_spaces() {
    let outlook: Outlook = serde_json::from_str("\"Strong Buy\"").unwrap();
    assert_eq!(outlook, Outlook::StrongBuy);
    assert_eq!(outlook.to_string(), "Strong Buy");
}

#[test]
fn categories_carry_their_query_values() {
    let values: Vec<&str> = Category::iter().map(|c| c.query_value()).collect();
    assert_eq!(values, ["top_picks", "undervalued", "growth", "momentum"]);
}

#[test]
fn every_category_has_tab_metadata() {
    for category in Category::iter() {
        assert!(!category.label().is_empty());
        assert!(!category.icon().is_empty());
        assert!(category.accent_class().starts_with("chart-"));
    }
}
