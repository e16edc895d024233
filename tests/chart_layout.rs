use chrono::NaiveDate;
use stock_dashboard_wasm::domain::chart::{CandleLayout, ScaleParams};
use stock_dashboard_wasm::domain::market_data::{PricePoint, PriceSeries};

fn day(day: u32, open: f64, high: f64, low: f64, close: f64, volume: f64) -> PricePoint {
    PricePoint {
        date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
        open,
        high,
        low,
        close,
        volume,
    }
}

fn sample_series() -> PriceSeries {
    PriceSeries::from_points(vec![
        day(13, 100.0, 110.0, 95.0, 105.0, 1_000.0),
        day(14, 105.0, 115.0, 100.0, 108.0, 1_500.0),
        day(15, 108.0, 112.0, 98.0, 99.0, 2_000.0),
    ])
}

#[test]
fn empty_series_yields_no_scale() {
    assert!(ScaleParams::compute(800, 420, &PriceSeries::default()).is_none());
}

#[test]
fn scale_covers_the_full_price_range() {
    let params = ScaleParams::compute(800, 420, &sample_series()).unwrap();
    assert_eq!(params.min_price, 95.0);
    assert_eq!(params.max_price, 115.0);
    assert_eq!(params.price_range, 20.0);
    assert_eq!(params.max_volume, 2_000.0);
}

#[test]
fn higher_prices_map_to_smaller_y() {
    let params = ScaleParams::compute(800, 420, &sample_series()).unwrap();
    assert!(params.price_y(115.0) < params.price_y(95.0));
    // The range extremes pin the price pane edges
    assert_eq!(params.price_y(115.0), params.padding);
    assert_eq!(params.price_y(95.0), params.padding + params.price_height);
}

#[test]
fn candles_are_spaced_evenly() {
    let params = ScaleParams::compute(800, 420, &sample_series()).unwrap();
    let spacing = params.candle_x(1) - params.candle_x(0);
    assert!((spacing - params.candle_width).abs() < 1e-9);
    // First candle sits half a slot in from the left padding
    assert!((params.candle_x(0) - (params.padding + params.candle_width / 2.0)).abs() < 1e-9);
}

#[test]
fn volume_bars_scale_to_the_series_maximum() {
    let series = sample_series();
    let params = ScaleParams::compute(800, 420, &series).unwrap();

    assert_eq!(params.volume_bar_height(2_000.0), params.volume_height);
    assert_eq!(params.volume_bar_height(1_000.0), params.volume_height / 2.0);
    assert_eq!(params.volume_bar_height(0.0), 0.0);
}

#[test]
fn volume_color_follows_close_versus_open() {
    let series = sample_series();
    let params = ScaleParams::compute(800, 420, &series).unwrap();

    let up = CandleLayout::compute(0, &series.points()[0], &params);
    let down = CandleLayout::compute(2, &series.points()[2], &params);
    assert!(up.is_up);
    assert!(!down.is_up);

    // A flat close counts as an up day
    let flat = day(16, 100.0, 101.0, 99.0, 100.0, 1.0);
    assert!(flat.is_up());
}

#[test]
fn flat_series_still_has_a_drawable_range() {
    let series = PriceSeries::from_points(vec![day(13, 100.0, 100.0, 100.0, 100.0, 10.0)]);
    let params = ScaleParams::compute(800, 420, &series).unwrap();
    assert_eq!(params.price_range, 1.0);
    let layout = CandleLayout::compute(0, &series.points()[0], &params);
    assert!(layout.body_height < 1.0);
}

#[test]
fn grid_levels_span_max_to_min() {
    let params = ScaleParams::compute(800, 420, &sample_series()).unwrap();
    let levels = params.grid_levels(4);
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0].1, 115.0);
    assert_eq!(levels[4].1, 95.0);
    assert!(levels[0].0 < levels[4].0);
}
