use chrono::NaiveDate;
use quickcheck_macros::quickcheck;
use stock_dashboard_wasm::domain::stocks::{
    sorted, Grade, Recommendation, Score, SortDirection, SortField, SortSpec, Ticker,
};

fn row(ticker: &str, valuation: u8, total: u8) -> Recommendation {
    Recommendation {
        ticker: Ticker::from(ticker),
        name: format!("{ticker} Inc."),
        sector: Some("Technology".to_string()),
        industry: None,
        valuation_score: Score::new(valuation),
        profitability_score: Score::new(50),
        growth_score: Score::new(50),
        momentum_score: Score::new(50),
        total_score: Score::new(total),
        grade: Grade::A,
        score_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
    }
}

#[test]
fn default_spec_is_total_descending() {
    let spec = SortSpec::default();
    assert_eq!(spec.field, SortField::Total);
    assert_eq!(spec.direction, SortDirection::Descending);
}

#[test]
fn clicking_active_column_flips_direction() {
    let spec = SortSpec::default().clicked(SortField::Total);
    assert_eq!(spec.field, SortField::Total);
    assert_eq!(spec.direction, SortDirection::Ascending);
}

#[test]
fn clicking_new_column_resets_to_descending() {
    let spec = SortSpec { field: SortField::Total, direction: SortDirection::Ascending };
    let spec = spec.clicked(SortField::Valuation);
    assert_eq!(spec.field, SortField::Valuation);
    assert_eq!(spec.direction, SortDirection::Descending);
}

#[test]
fn sorts_by_total_descending() {
    let rows = vec![row("MSFT", 72, 79), row("AAPL", 75, 81), row("GOOGL", 80, 78)];
    let ordered = sorted(&rows, SortSpec::default());
    let tickers: Vec<&str> = ordered.iter().map(|r| r.ticker.value()).collect();
    assert_eq!(tickers, ["AAPL", "MSFT", "GOOGL"]);
}

#[test]
fn sorts_ticker_with_case_insensitive_ordering() {
    let rows = vec![row("msft", 0, 0), row("AAPL", 0, 0)];
    let ordered = sorted(
        &rows,
        SortSpec { field: SortField::Ticker, direction: SortDirection::Ascending },
    );
    assert_eq!(ordered[0].ticker.value(), "AAPL");
    assert_eq!(ordered[1].ticker.value(), "MSFT");
}

#[test]
fn sorting_never_mutates_the_snapshot() {
    let rows = vec![row("MSFT", 72, 79), row("AAPL", 75, 81)];
    let _ = sorted(&rows, SortSpec::default());
    assert_eq!(rows[0].ticker.value(), "MSFT");
}

/// Toggling the direction of the active numeric column twice lands back on
/// the starting order
#[quickcheck]
fn direction_round_trip_is_identity(seed: Vec<(u8, u8)>) -> bool {
    let rows: Vec<Recommendation> = seed
        .iter()
        .enumerate()
        .map(|(i, (valuation, total))| row(&format!("T{i:03}"), *valuation, *total))
        .collect();

    let spec = SortSpec { field: SortField::Valuation, direction: SortDirection::Descending };
    let toggled_twice = spec.clicked(SortField::Valuation).clicked(SortField::Valuation);

    sorted(&rows, spec) == sorted(&rows, toggled_twice)
}
