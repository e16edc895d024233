use chrono::{Datelike, NaiveDate};
use stock_dashboard_wasm::domain::market_data::{PricePoint, PriceSeries};

fn point(day: u32, low: f64, high: f64, volume: f64) -> PricePoint {
    PricePoint {
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        open: low + 1.0,
        high,
        low,
        close: high - 1.0,
        volume,
    }
}

#[test]
fn series_restores_chronological_order() {
    let series =
        PriceSeries::from_points(vec![point(20, 10.0, 20.0, 5.0), point(18, 12.0, 22.0, 7.0)]);
    let dates: Vec<u32> = series.points().iter().map(|p| p.date.day()).collect();
    assert_eq!(dates, [18, 20]);
    assert_eq!(series.latest().unwrap().date.day(), 20);
}

#[test]
fn price_range_spans_lows_and_highs() {
    let series =
        PriceSeries::from_points(vec![point(18, 9.0, 14.0, 1.0), point(19, 11.0, 21.0, 2.0)]);
    assert_eq!(series.price_range(), Some((9.0, 21.0)));
}

#[test]
fn empty_series_has_no_range() {
    let series = PriceSeries::default();
    assert!(series.is_empty());
    assert_eq!(series.price_range(), None);
    assert_eq!(series.max_volume(), 0.0);
}

#[test]
fn max_volume_tracks_the_heaviest_day() {
    let series = PriceSeries::from_points(vec![
        point(18, 9.0, 14.0, 1_000.0),
        point(19, 11.0, 21.0, 3_500.0),
        point(20, 11.0, 21.0, 2_000.0),
    ]);
    assert_eq!(series.max_volume(), 3_500.0);
}
